use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::EntityId;

/// A distribution board holding devices.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Panel {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub location: String,
}
