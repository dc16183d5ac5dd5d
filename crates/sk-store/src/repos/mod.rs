//! Repository modules implementing the mutation surface of the store.
//!
//! Each module adds methods to `EntityStore` via `impl EntityStore` blocks.

pub mod circuit;
pub mod device;
pub mod endpoint;
pub mod inspector;
pub mod link;
pub mod panel;
pub mod room;
pub mod verification;
