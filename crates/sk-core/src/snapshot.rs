//! A consistent, read-only view of every entity table.
//!
//! The topology engine never talks to a data source. Callers capture one
//! [`Snapshot`] per rebuild (one isolation boundary) and pass it in by
//! reference, so a rebuild can never mix pre- and post-mutation rows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Circuit, Device, Endpoint, Panel, ProtectionLink, Room};
use crate::enums::EntityKind;
use crate::identity::{EntityId, EntityRef};
use crate::inspect::InspectedEntity;

/// All entity rows as of one point in time, in repository order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(default)]
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub devices: Vec<Device>,
    #[serde(default)]
    pub protection_links: Vec<ProtectionLink>,
    #[serde(default)]
    pub circuits: Vec<Circuit>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl Snapshot {
    /// `true` when no devices, circuits, rooms or endpoints exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
            && self.circuits.is_empty()
            && self.rooms.is_empty()
            && self.endpoints.is_empty()
    }

    #[must_use]
    pub fn panel(&self, id: EntityId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// The panel shown by default in the spatial view.
    #[must_use]
    pub fn first_panel(&self) -> Option<&Panel> {
        self.panels.first()
    }

    #[must_use]
    pub fn device(&self, id: EntityId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn circuit(&self, id: EntityId) -> Option<&Circuit> {
        self.circuits.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn room(&self, id: EntityId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn endpoint(&self, id: EntityId) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Devices mounted on one panel, in repository order.
    pub fn devices_on_panel(&self, panel_id: EntityId) -> impl Iterator<Item = &Device> {
        self.devices.iter().filter(move |d| d.panel_id == panel_id)
    }

    /// Endpoints fed by one circuit, in repository order.
    pub fn endpoints_of_circuit(&self, circuit_id: EntityId) -> impl Iterator<Item = &Endpoint> {
        self.endpoints
            .iter()
            .filter(move |e| e.circuit_id == circuit_id)
    }

    /// The circuit owned by a breaker, if any.
    #[must_use]
    pub fn circuit_of_mcb(&self, mcb_device_id: EntityId) -> Option<&Circuit> {
        self.circuits
            .iter()
            .find(|c| c.mcb_device_id == mcb_device_id)
    }

    /// Whether the referenced entity exists in this snapshot.
    #[must_use]
    pub fn contains(&self, entity: EntityRef) -> bool {
        match entity.kind {
            EntityKind::Device => self.device(entity.id).is_some(),
            EntityKind::Circuit => self.circuit(entity.id).is_some(),
            EntityKind::Room => self.room(entity.id).is_some(),
            EntityKind::Endpoint => self.endpoint(entity.id).is_some(),
        }
    }

    /// Resolve an entity into its inspection variant.
    #[must_use]
    pub fn inspect(&self, entity: EntityRef) -> Option<InspectedEntity> {
        match entity.kind {
            EntityKind::Device => self.device(entity.id).cloned().map(InspectedEntity::Device),
            EntityKind::Circuit => self
                .circuit(entity.id)
                .cloned()
                .map(InspectedEntity::Circuit),
            EntityKind::Room => self.room(entity.id).cloned().map(InspectedEntity::Room),
            EntityKind::Endpoint => self
                .endpoint(entity.id)
                .cloned()
                .map(InspectedEntity::Endpoint),
        }
    }
}
