use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Confidence, EntityKind, Purpose};
use crate::identity::{EntityId, EntityRef};

/// The wiring run behind one breaker. A breaker owns at most one circuit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Circuit {
    pub id: EntityId,
    pub mcb_device_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub purpose: Purpose,
    #[serde(default)]
    pub cable: String,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default)]
    pub notes: String,
}

impl Circuit {
    #[must_use]
    pub const fn entity_ref(&self) -> EntityRef {
        EntityRef::new(EntityKind::Circuit, self.id)
    }
}
