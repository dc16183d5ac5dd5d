use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::EntityId;

/// Supervision of one breaker by one RCD.
///
/// Only the `(rcd_device_id, mcb_device_id)` pair is unique. Nothing stops a
/// breaker from appearing under two RCDs, so consumers use set semantics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct ProtectionLink {
    pub rcd_device_id: EntityId,
    pub mcb_device_id: EntityId,
}

impl ProtectionLink {
    #[must_use]
    pub const fn new(rcd_device_id: EntityId, mcb_device_id: EntityId) -> Self {
        Self {
            rcd_device_id,
            mcb_device_id,
        }
    }
}
