//! Entity references and the node key wire format.
//!
//! A node key is `"<kind>:<id>"`, e.g. `"device:7"`. Rendering and
//! click-to-select both parse it by splitting on the first colon, so the format
//! must stay stable.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::errors::CoreError;

/// Row identity as assigned by the repository.
pub type EntityId = i64;

/// Format a node key from its parts.
#[must_use]
pub fn node_key(kind: EntityKind, id: EntityId) -> String {
    format!("{kind}:{id}")
}

/// A typed `(kind, id)` pair identifying one entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: EntityId,
}

impl EntityRef {
    #[must_use]
    pub const fn new(kind: EntityKind, id: EntityId) -> Self {
        Self { kind, id }
    }

    #[must_use]
    pub const fn device(id: EntityId) -> Self {
        Self::new(EntityKind::Device, id)
    }

    #[must_use]
    pub const fn circuit(id: EntityId) -> Self {
        Self::new(EntityKind::Circuit, id)
    }

    #[must_use]
    pub const fn room(id: EntityId) -> Self {
        Self::new(EntityKind::Room, id)
    }

    #[must_use]
    pub const fn endpoint(id: EntityId) -> Self {
        Self::new(EntityKind::Endpoint, id)
    }

    /// The node key for this entity.
    #[must_use]
    pub fn key(&self) -> String {
        node_key(self.kind, self.id)
    }

    /// Parse a node key of the form `"<kind>:<id>"`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidKey` when there is no colon, the kind prefix
    /// is unknown, or the id is not an integer.
    pub fn parse_key(key: &str) -> Result<Self, CoreError> {
        let (kind, id) = key
            .split_once(':')
            .ok_or_else(|| CoreError::InvalidKey(key.to_string()))?;
        let kind =
            EntityKind::from_key_prefix(kind).ok_or_else(|| CoreError::InvalidKey(key.to_string()))?;
        let id = id
            .parse::<EntityId>()
            .map_err(|_| CoreError::InvalidKey(key.to_string()))?;
        Ok(Self { kind, id })
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl FromStr for EntityRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s)
    }
}
