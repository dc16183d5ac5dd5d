//! Entity structs for the documented installation.
//!
//! Each entity maps to one repository table. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.
//! Optional text columns default to empty strings so hand-written snapshot
//! files can omit them.

mod circuit;
mod device;
mod endpoint;
mod panel;
mod protection;
mod room;

pub use circuit::Circuit;
pub use device::Device;
pub use endpoint::Endpoint;
pub use panel::Panel;
pub use protection::ProtectionLink;
pub use room::Room;
