//! # sk-store
//!
//! In-memory entity store for Stromkreis.
//!
//! Holds the relational rows of one documented installation (panels, devices,
//! protection links, circuits, rooms, endpoints) and serves the read contract
//! the topology engine consumes through [`repository::Repository`]. Mutations
//! take `&mut self` while reads take `&self`, so a snapshot can never observe
//! a half-applied mutation.
//!
//! Durable storage is somebody else's job: a store starts empty, from the demo
//! installation ([`demo::seed_demo`]) or from a snapshot JSON file.

pub mod demo;
pub mod error;
pub mod repos;
pub mod repository;

use std::path::Path;

use error::StoreError;
use sk_core::enums::EntityKind;
use sk_core::identity::{EntityId, EntityRef};
use sk_core::snapshot::Snapshot;

/// Next free id per table. Ids are never reused within one store.
#[derive(Debug, Clone, Copy)]
struct IdCounters {
    panel: EntityId,
    device: EntityId,
    circuit: EntityId,
    room: EntityId,
    endpoint: EntityId,
}

impl IdCounters {
    fn after(snapshot: &Snapshot) -> Self {
        fn next<'a>(ids: impl Iterator<Item = &'a EntityId>) -> EntityId {
            ids.max().map_or(1, |max| max + 1)
        }
        Self {
            panel: next(snapshot.panels.iter().map(|p| &p.id)),
            device: next(snapshot.devices.iter().map(|d| &d.id)),
            circuit: next(snapshot.circuits.iter().map(|c| &c.id)),
            room: next(snapshot.rooms.iter().map(|r| &r.id)),
            endpoint: next(snapshot.endpoints.iter().map(|e| &e.id)),
        }
    }
}

/// Central store holding every entity table of one installation.
#[derive(Debug, Clone)]
pub struct EntityStore {
    tables: Snapshot,
    ids: IdCounters,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::from_snapshot(Snapshot::default())
    }

    /// Adopt existing rows as-is. Id counters continue after the highest id
    /// of each table.
    ///
    /// Rows are not validated here; the topology engine skips dangling
    /// references on its own.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let ids = IdCounters::after(&snapshot);
        Self {
            tables: snapshot,
            ids,
        }
    }

    /// Load rows from a snapshot JSON file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Snapshot` if the file cannot be read or parsed.
    pub fn open_json(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Snapshot(format!("{}: {e}", path.display())))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Snapshot(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            devices = snapshot.devices.len(),
            endpoints = snapshot.endpoints.len(),
            "loaded snapshot file"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Delete any entity, cascading like the relational schema does.
    ///
    /// - device: its protection links, its circuit and that circuit's endpoints
    /// - circuit: its endpoints
    /// - room: its endpoints
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the entity does not exist.
    pub fn delete(&mut self, entity: EntityRef) -> Result<(), StoreError> {
        match entity.kind {
            EntityKind::Device => self.delete_device(entity.id),
            EntityKind::Circuit => self.delete_circuit(entity.id),
            EntityKind::Room => self.delete_room(entity.id),
            EntityKind::Endpoint => self.delete_endpoint(entity.id),
        }
    }

    fn take_id(counter: &mut EntityId) -> EntityId {
        let id = *counter;
        *counter += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use std::io::Write;

    #[test]
    fn new_store_is_empty() {
        let store = EntityStore::new();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn id_counters_continue_after_existing_rows() {
        let store = demo::seed_demo();
        let snapshot = store.snapshot();
        let mut store = EntityStore::from_snapshot(snapshot);
        let room = store.add_room("Keller", "UG").unwrap();
        assert_eq!(room.id, 9);
    }

    #[test]
    fn open_json_reads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"rooms": [{{"id": 4, "name": "Bad"}}], "devices": []}}"#
        )
        .unwrap();

        let store = EntityStore::open_json(file.path()).unwrap();
        assert_eq!(store.list_rooms().len(), 1);
        assert_eq!(store.list_rooms()[0].name, "Bad");
    }

    #[test]
    fn open_json_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = EntityStore::open_json(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Snapshot(_)));
    }

    #[test]
    fn open_json_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EntityStore::open_json(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, StoreError::Snapshot(msg) if msg.contains("missing.json")));
    }
}
