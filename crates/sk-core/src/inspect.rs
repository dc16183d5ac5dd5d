//! Tagged inspection variant with uniform accessors per entity kind.
//!
//! Entity kinds name their fields differently (device `label`/`rating`, room
//! `name`/`floor`, endpoint `description`). [`InspectedEntity`] maps each kind
//! onto the same three accessors once, at the boundary where an entity is
//! loaded, instead of probing fields at runtime.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Circuit, Device, Endpoint, Room};
use crate::enums::Confidence;
use crate::identity::EntityRef;

/// An entity loaded for inspection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "kind", content = "entity", rename_all = "snake_case")]
pub enum InspectedEntity {
    Device(Device),
    Circuit(Circuit),
    Room(Room),
    Endpoint(Endpoint),
}

impl InspectedEntity {
    #[must_use]
    pub const fn entity_ref(&self) -> EntityRef {
        match self {
            Self::Device(d) => d.entity_ref(),
            Self::Circuit(c) => c.entity_ref(),
            Self::Room(r) => r.entity_ref(),
            Self::Endpoint(e) => e.entity_ref(),
        }
    }

    /// Primary name. Endpoints without a description fall back to their kind.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Device(d) => &d.label,
            Self::Circuit(c) => &c.name,
            Self::Room(r) => &r.name,
            Self::Endpoint(e) => e.display_name(),
        }
    }

    /// Secondary detail: device rating, circuit cable, room floor.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        match self {
            Self::Device(d) => &d.rating,
            Self::Circuit(c) => &c.cable,
            Self::Room(r) => &r.floor,
            Self::Endpoint(_) => "",
        }
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        match self {
            Self::Device(d) => &d.notes,
            Self::Circuit(c) => &c.notes,
            Self::Room(r) => &r.notes,
            Self::Endpoint(e) => &e.notes,
        }
    }

    /// Only circuits and endpoints carry a confidence rating.
    #[must_use]
    pub const fn confidence(&self) -> Option<Confidence> {
        match self {
            Self::Circuit(c) => Some(c.confidence),
            Self::Endpoint(e) => Some(e.confidence),
            Self::Device(_) | Self::Room(_) => None,
        }
    }

    /// Apply an inspector edit, writing each accessor back to its field.
    ///
    /// Endpoints have no subtitle field, so `edit.subtitle` is ignored there.
    #[must_use]
    pub fn with_edit(self, edit: &EntityEdit) -> Self {
        match self {
            Self::Device(mut d) => {
                d.label.clone_from(&edit.name);
                d.rating.clone_from(&edit.subtitle);
                d.notes.clone_from(&edit.notes);
                Self::Device(d)
            }
            Self::Circuit(mut c) => {
                c.name.clone_from(&edit.name);
                c.cable.clone_from(&edit.subtitle);
                c.notes.clone_from(&edit.notes);
                Self::Circuit(c)
            }
            Self::Room(mut r) => {
                r.name.clone_from(&edit.name);
                r.floor.clone_from(&edit.subtitle);
                r.notes.clone_from(&edit.notes);
                Self::Room(r)
            }
            Self::Endpoint(mut e) => {
                e.description.clone_from(&edit.name);
                e.notes.clone_from(&edit.notes);
                Self::Endpoint(e)
            }
        }
    }
}

/// Values submitted from an inspector form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntityEdit {
    pub name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub notes: String,
}
