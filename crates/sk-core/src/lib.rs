//! # sk-core
//!
//! Core types shared across all Stromkreis crates.
//!
//! This crate provides:
//! - Entity structs for the documented installation (panels, devices,
//!   protection links, circuits, rooms, endpoints)
//! - Enums for device kinds, circuit purposes, endpoint kinds and the ordered
//!   confidence rating
//! - Entity references and the `"<kind>:<id>"` node key wire format
//! - The consistent [`snapshot::Snapshot`] value the topology engine reads
//! - The tagged inspection variant used by entity inspectors
//! - One-hop protection reachability and RCD mapping plans
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod inspect;
pub mod protection;
pub mod snapshot;
