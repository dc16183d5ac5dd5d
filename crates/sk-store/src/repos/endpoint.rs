//! Endpoint repository and confidence updates.

use sk_core::entities::Endpoint;
use sk_core::enums::{Confidence, EndpointKind, EntityKind};
use sk_core::identity::{EntityId, EntityRef};

use crate::EntityStore;
use crate::error::StoreError;

impl EntityStore {
    /// Add an endpoint fed by `circuit_id` and located in `room_id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidReference` if the circuit or room is missing.
    pub fn add_endpoint(
        &mut self,
        circuit_id: EntityId,
        room_id: EntityId,
        kind: EndpointKind,
        description: &str,
    ) -> Result<Endpoint, StoreError> {
        if self.tables.circuit(circuit_id).is_none() {
            return Err(StoreError::InvalidReference(format!(
                "circuit {circuit_id} does not exist"
            )));
        }
        if self.tables.room(room_id).is_none() {
            return Err(StoreError::InvalidReference(format!(
                "room {room_id} does not exist"
            )));
        }
        let endpoint = Endpoint {
            id: Self::take_id(&mut self.ids.endpoint),
            circuit_id,
            room_id,
            kind,
            description: description.to_string(),
            confidence: Confidence::Unknown,
            notes: String::new(),
        };
        self.tables.endpoints.push(endpoint.clone());
        tracing::info!(id = endpoint.id, circuit_id, room_id, "added endpoint");
        Ok(endpoint)
    }

    /// Set the confidence of a circuit or endpoint.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidReference` for devices and rooms, which carry none
    /// - `StoreError::NotFound` if the entity does not exist
    pub fn set_confidence(
        &mut self,
        entity: EntityRef,
        confidence: Confidence,
    ) -> Result<(), StoreError> {
        let id = entity.id;
        let slot = match entity.kind {
            EntityKind::Circuit => self
                .tables
                .circuits
                .iter_mut()
                .find(|c| c.id == id)
                .map(|c| &mut c.confidence)
                .ok_or(StoreError::NotFound { table: "circuit", id })?,
            EntityKind::Endpoint => self
                .tables
                .endpoints
                .iter_mut()
                .find(|e| e.id == id)
                .map(|e| &mut e.confidence)
                .ok_or(StoreError::NotFound { table: "endpoint", id })?,
            EntityKind::Device | EntityKind::Room => {
                return Err(StoreError::InvalidReference(format!(
                    "{entity} has no confidence rating"
                )));
            }
        };
        *slot = confidence;
        tracing::info!(entity = %entity, confidence = %confidence, "set confidence");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the endpoint does not exist.
    pub fn delete_endpoint(&mut self, id: EntityId) -> Result<(), StoreError> {
        if self.tables.endpoint(id).is_none() {
            return Err(StoreError::NotFound { table: "endpoint", id });
        }
        self.tables.endpoints.retain(|e| e.id != id);
        tracing::info!(id, "deleted endpoint");
        Ok(())
    }
}
