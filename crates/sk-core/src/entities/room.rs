use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::identity::{EntityId, EntityRef};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Room {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub notes: String,
}

impl Room {
    #[must_use]
    pub const fn entity_ref(&self) -> EntityRef {
        EntityRef::new(EntityKind::Room, self.id)
    }
}
