//! Breaker switch-off verification.
//!
//! With one breaker switched off, the user ticks every endpoint that went
//! dead. Ticked endpoints become confirmed and get a dated note line; a
//! previously confirmed endpoint that stayed live drops back to likely.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use sk_core::identity::EntityId;

use crate::EntityStore;
use crate::error::StoreError;

/// Endpoint ids whose confidence changed during one verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub circuit_id: EntityId,
    pub confirmed: Vec<EntityId>,
    pub downgraded: Vec<EntityId>,
}

fn verification_note(date: NaiveDate) -> String {
    format!("verified on {} (LS-Off)", date.format("%Y-%m-%d"))
}

impl EntityStore {
    /// Record which endpoints of `circuit_id` went dead with its breaker off.
    ///
    /// Ids in `confirmed_off` that belong to another circuit are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the circuit does not exist.
    pub fn apply_verification(
        &mut self,
        circuit_id: EntityId,
        confirmed_off: &BTreeSet<EntityId>,
        date: NaiveDate,
    ) -> Result<VerificationReport, StoreError> {
        if self.tables.circuit(circuit_id).is_none() {
            return Err(StoreError::NotFound {
                table: "circuit",
                id: circuit_id,
            });
        }

        let note = verification_note(date);
        let mut report = VerificationReport {
            circuit_id,
            ..VerificationReport::default()
        };
        for endpoint in self
            .tables
            .endpoints
            .iter_mut()
            .filter(|e| e.circuit_id == circuit_id)
        {
            let checked = confirmed_off.contains(&endpoint.id);
            let next = endpoint.confidence.after_verification(checked);
            if checked {
                endpoint.notes = format!("{}\n{note}", endpoint.notes).trim().to_string();
                report.confirmed.push(endpoint.id);
            } else if next != endpoint.confidence {
                report.downgraded.push(endpoint.id);
            }
            endpoint.confidence = next;
        }

        tracing::info!(
            circuit_id,
            confirmed = report.confirmed.len(),
            downgraded = report.downgraded.len(),
            "applied verification"
        );
        Ok(report)
    }
}
