//! Panel repository.

use sk_core::entities::Panel;
use sk_core::identity::EntityId;

use crate::EntityStore;
use crate::error::StoreError;

impl EntityStore {
    pub fn add_panel(&mut self, name: &str, location: &str) -> Result<Panel, StoreError> {
        let panel = Panel {
            id: Self::take_id(&mut self.ids.panel),
            name: name.to_string(),
            location: location.to_string(),
        };
        self.tables.panels.push(panel.clone());
        tracing::info!(id = panel.id, name, "added panel");
        Ok(panel)
    }

    /// Delete a panel together with every device mounted on it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the panel does not exist.
    pub fn delete_panel(&mut self, id: EntityId) -> Result<(), StoreError> {
        if self.tables.panel(id).is_none() {
            return Err(StoreError::NotFound { table: "panel", id });
        }
        let devices: Vec<EntityId> = self
            .tables
            .devices_on_panel(id)
            .map(|d| d.id)
            .collect();
        for device_id in devices {
            self.delete_device(device_id)?;
        }
        self.tables.panels.retain(|p| p.id != id);
        tracing::info!(id, "deleted panel");
        Ok(())
    }
}
