//! # sk-topology
//!
//! Turns one entity [`Snapshot`](sk_core::snapshot::Snapshot) into the two
//! synchronized views of an installation:
//!
//! - [`builder`]: filtered, layered node/edge set (RCD → MCB → circuit → room → endpoint)
//! - [`filter`]: "uncertain only" and device-scope predicates
//! - [`layout`]: deterministic layered coordinates
//! - [`highlight`]: selection → emphasized keys, with RCD → MCB reachability
//! - [`placement`]: grid-snapped device cards on the panel view
//! - [`session`]: selection/filter state and event propagation between views
//!
//! Every function here is pure over its snapshot argument; the session is the
//! only place holding state between calls.

pub mod builder;
pub mod filter;
pub mod highlight;
pub mod layout;
pub mod placement;
pub mod session;

pub use builder::{Layer, TopologyEdge, TopologyGraph, TopologyNode, build};
pub use filter::TopologyFilter;
pub use session::{TopologySession, ViewEvent, ViewUpdate};
