//! Device repository: mounting, moving and removing panel devices.

use sk_core::entities::Device;
use sk_core::enums::DeviceKind;
use sk_core::identity::EntityId;

use crate::EntityStore;
use crate::error::StoreError;

impl EntityStore {
    /// Mount a new device at the top-left cell of a panel.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidReference` if the panel does not exist.
    pub fn add_device(
        &mut self,
        panel_id: EntityId,
        kind: DeviceKind,
        label: &str,
        rating: &str,
    ) -> Result<Device, StoreError> {
        if self.tables.panel(panel_id).is_none() {
            return Err(StoreError::InvalidReference(format!(
                "panel {panel_id} does not exist"
            )));
        }
        let device = Device {
            id: Self::take_id(&mut self.ids.device),
            panel_id,
            kind,
            label: label.to_string(),
            rating: rating.to_string(),
            poles: 1,
            row: 0,
            col: 0,
            notes: String::new(),
        };
        self.tables.devices.push(device.clone());
        tracing::info!(id = device.id, kind = %kind, label, "added device");
        Ok(device)
    }

    /// Persist a snapped grid cell for a device.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the device does not exist.
    pub fn move_device(&mut self, id: EntityId, row: u32, col: u32) -> Result<Device, StoreError> {
        let device = self
            .tables
            .devices
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(StoreError::NotFound { table: "device", id })?;
        device.row = row;
        device.col = col;
        tracing::info!(id, row, col, "moved device");
        Ok(device.clone())
    }

    /// Delete a device, its protection links, its circuit and that circuit's
    /// endpoints.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the device does not exist.
    pub fn delete_device(&mut self, id: EntityId) -> Result<(), StoreError> {
        if self.tables.device(id).is_none() {
            return Err(StoreError::NotFound { table: "device", id });
        }
        self.tables
            .protection_links
            .retain(|l| l.rcd_device_id != id && l.mcb_device_id != id);
        let circuits: Vec<EntityId> = self
            .tables
            .circuits
            .iter()
            .filter(|c| c.mcb_device_id == id)
            .map(|c| c.id)
            .collect();
        for circuit_id in circuits {
            self.delete_circuit(circuit_id)?;
        }
        self.tables.devices.retain(|d| d.id != id);
        tracing::info!(id, "deleted device");
        Ok(())
    }
}
