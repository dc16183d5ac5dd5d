//! The read contract consumed by the topology engine.
//!
//! Every method returns rows in repository order. Implementations must make
//! [`Repository::snapshot`] reflect one consistent point in time.

use sk_core::entities::{Circuit, Device, Endpoint, Panel, ProtectionLink, Room};
use sk_core::identity::EntityId;
use sk_core::snapshot::Snapshot;

use crate::EntityStore;

/// Read-only queries over the entity tables.
pub trait Repository {
    fn list_panels(&self) -> Vec<Panel>;

    /// All devices, or only those on `panel_id`.
    fn list_devices(&self, panel_id: Option<EntityId>) -> Vec<Device>;

    fn list_protection_links(&self) -> Vec<ProtectionLink>;

    fn list_circuits(&self) -> Vec<Circuit>;

    fn list_rooms(&self) -> Vec<Room>;

    /// All endpoints, or only those fed by `circuit_id`.
    fn list_endpoints(&self, circuit_id: Option<EntityId>) -> Vec<Endpoint>;

    /// Capture every table in one batch.
    ///
    /// The default composes the list queries within a single `&self` borrow.
    /// Implementations backed by a shared data source should override it and
    /// read inside one transaction.
    fn snapshot(&self) -> Snapshot {
        Snapshot {
            panels: self.list_panels(),
            devices: self.list_devices(None),
            protection_links: self.list_protection_links(),
            circuits: self.list_circuits(),
            rooms: self.list_rooms(),
            endpoints: self.list_endpoints(None),
        }
    }
}

impl Repository for EntityStore {
    fn list_panels(&self) -> Vec<Panel> {
        self.tables.panels.clone()
    }

    fn list_devices(&self, panel_id: Option<EntityId>) -> Vec<Device> {
        self.tables
            .devices
            .iter()
            .filter(|d| panel_id.is_none_or(|p| d.panel_id == p))
            .cloned()
            .collect()
    }

    fn list_protection_links(&self) -> Vec<ProtectionLink> {
        self.tables.protection_links.clone()
    }

    fn list_circuits(&self) -> Vec<Circuit> {
        self.tables.circuits.clone()
    }

    fn list_rooms(&self) -> Vec<Room> {
        self.tables.rooms.clone()
    }

    fn list_endpoints(&self, circuit_id: Option<EntityId>) -> Vec<Endpoint> {
        self.tables
            .endpoints
            .iter()
            .filter(|e| circuit_id.is_none_or(|c| e.circuit_id == c))
            .cloned()
            .collect()
    }

    fn snapshot(&self) -> Snapshot {
        self.tables.clone()
    }
}
