use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Confidence, EndpointKind, EntityKind};
use crate::identity::{EntityId, EntityRef};

/// A physical outlet fed by one circuit and located in one room.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Endpoint {
    pub id: EntityId,
    pub circuit_id: EntityId,
    pub room_id: EntityId,
    #[serde(default)]
    pub kind: EndpointKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default)]
    pub notes: String,
}

impl Endpoint {
    #[must_use]
    pub const fn entity_ref(&self) -> EntityRef {
        EntityRef::new(EntityKind::Endpoint, self.id)
    }

    /// The description, or the endpoint kind when none was entered.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.description.is_empty() {
            self.kind.as_str()
        } else {
            &self.description
        }
    }
}
