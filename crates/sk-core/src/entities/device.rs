use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DeviceKind, EntityKind};
use crate::identity::{EntityId, EntityRef};

const fn default_poles() -> u8 {
    1
}

/// A device mounted on a panel at a persisted grid cell.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Device {
    pub id: EntityId,
    pub panel_id: EntityId,
    pub kind: DeviceKind,
    pub label: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default = "default_poles")]
    pub poles: u8,
    #[serde(default)]
    pub row: u32,
    #[serde(default)]
    pub col: u32,
    #[serde(default)]
    pub notes: String,
}

impl Device {
    #[must_use]
    pub const fn entity_ref(&self) -> EntityRef {
        EntityRef::new(EntityKind::Device, self.id)
    }

    #[must_use]
    pub fn is_rcd(&self) -> bool {
        self.kind == DeviceKind::Rcd
    }

    #[must_use]
    pub fn is_mcb(&self) -> bool {
        self.kind == DeviceKind::Mcb
    }
}
