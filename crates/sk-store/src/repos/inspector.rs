//! Inspector edits: write a submitted form back to the inspected entity.

use sk_core::identity::{EntityId, EntityRef};
use sk_core::inspect::{EntityEdit, InspectedEntity};

use crate::EntityStore;
use crate::error::StoreError;

impl EntityStore {
    /// Resolve an entity for the inspector.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the entity does not exist.
    pub fn inspect(&self, entity: EntityRef) -> Result<InspectedEntity, StoreError> {
        self.tables.inspect(entity).ok_or(StoreError::NotFound {
            table: entity.kind.as_str(),
            id: entity.id,
        })
    }

    /// Apply an inspector edit and return the updated entity.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the entity does not exist.
    pub fn apply_edit(
        &mut self,
        entity: EntityRef,
        edit: &EntityEdit,
    ) -> Result<InspectedEntity, StoreError> {
        let edited = self.inspect(entity)?.with_edit(edit);
        match &edited {
            InspectedEntity::Device(d) => replace(&mut self.tables.devices, d, |x| x.id),
            InspectedEntity::Circuit(c) => replace(&mut self.tables.circuits, c, |x| x.id),
            InspectedEntity::Room(r) => replace(&mut self.tables.rooms, r, |x| x.id),
            InspectedEntity::Endpoint(e) => replace(&mut self.tables.endpoints, e, |x| x.id),
        }
        tracing::info!(entity = %entity, "applied inspector edit");
        Ok(edited)
    }
}

fn replace<T: Clone>(rows: &mut [T], updated: &T, id: impl Fn(&T) -> EntityId) {
    let target = id(updated);
    if let Some(row) = rows.iter_mut().find(|r| id(&**r) == target) {
        row.clone_from(updated);
    }
}
