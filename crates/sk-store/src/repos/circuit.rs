//! Circuit repository. A breaker owns at most one circuit.

use sk_core::entities::Circuit;
use sk_core::enums::{Confidence, Purpose};
use sk_core::identity::EntityId;

use crate::EntityStore;
use crate::error::StoreError;

impl EntityStore {
    /// Attach a new circuit to an MCB.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidReference` if `mcb_device_id` is not an MCB
    /// - `StoreError::Constraint` if the breaker already feeds a circuit
    pub fn add_circuit(
        &mut self,
        mcb_device_id: EntityId,
        name: &str,
        purpose: Purpose,
    ) -> Result<Circuit, StoreError> {
        match self.tables.device(mcb_device_id) {
            Some(d) if d.is_mcb() => {}
            Some(d) => {
                return Err(StoreError::InvalidReference(format!(
                    "device {mcb_device_id} is {}, not MCB",
                    d.kind
                )));
            }
            None => {
                return Err(StoreError::InvalidReference(format!(
                    "device {mcb_device_id} does not exist"
                )));
            }
        }
        if let Some(existing) = self.tables.circuit_of_mcb(mcb_device_id) {
            return Err(StoreError::Constraint(format!(
                "MCB {mcb_device_id} already feeds circuit {}",
                existing.id
            )));
        }

        let circuit = Circuit {
            id: Self::take_id(&mut self.ids.circuit),
            mcb_device_id,
            name: name.to_string(),
            purpose,
            cable: String::new(),
            confidence: Confidence::Unknown,
            notes: String::new(),
        };
        self.tables.circuits.push(circuit.clone());
        tracing::info!(id = circuit.id, mcb_device_id, name, "added circuit");
        Ok(circuit)
    }

    /// Delete a circuit and every endpoint it feeds.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the circuit does not exist.
    pub fn delete_circuit(&mut self, id: EntityId) -> Result<(), StoreError> {
        if self.tables.circuit(id).is_none() {
            return Err(StoreError::NotFound { table: "circuit", id });
        }
        let before = self.tables.endpoints.len();
        self.tables.endpoints.retain(|e| e.circuit_id != id);
        self.tables.circuits.retain(|c| c.id != id);
        tracing::info!(
            id,
            endpoints = before - self.tables.endpoints.len(),
            "deleted circuit"
        );
        Ok(())
    }
}
