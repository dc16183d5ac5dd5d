//! Snapshot + filter → typed, layered node and edge set.
//!
//! The topology is a fixed five-tier hierarchy:
//!
//! ```text
//! RCD ─▶ MCB ─▶ Circuit ─▶ Room ─▶ Endpoint
//! ```
//!
//! Dangling references are skipped and logged at `debug`; nothing here fails.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use sk_core::entities::{Circuit, Device, Endpoint};
use sk_core::enums::Confidence;
use sk_core::identity::{EntityId, EntityRef};
use sk_core::snapshot::Snapshot;

use crate::filter::{ResolvedFilter, TopologyFilter};

// ---------------------------------------------------------------------------
// Layer
// ---------------------------------------------------------------------------

/// Tier of a node in the layered graph. Edges only join adjacent tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Rcd,
    Mcb,
    Circuit,
    Room,
    Endpoint,
}

impl Layer {
    pub const ALL: [Self; 5] = [
        Self::Rcd,
        Self::Mcb,
        Self::Circuit,
        Self::Room,
        Self::Endpoint,
    ];

    /// Column index: RCD 0 through Endpoint 4.
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Self::Rcd => 0,
            Self::Mcb => 1,
            Self::Circuit => 2,
            Self::Room => 3,
            Self::Endpoint => 4,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rcd => "rcd",
            Self::Mcb => "mcb",
            Self::Circuit => "circuit",
            Self::Room => "room",
            Self::Endpoint => "endpoint",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Graph types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyNode {
    /// `"<kind>:<id>"`, unique across kinds.
    pub key: String,
    pub entity: EntityRef,
    pub layer: Layer,
    pub title: String,
    /// Only circuits and endpoints carry one.
    pub confidence: Option<Confidence>,
}

impl TopologyNode {
    fn new(entity: EntityRef, layer: Layer, title: &str, confidence: Option<Confidence>) -> Self {
        Self {
            key: entity.key(),
            entity,
            layer,
            title: title.to_string(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyEdge {
    pub source: String,
    pub target: String,
}

impl TopologyEdge {
    fn new(source: EntityRef, target: EntityRef) -> Self {
        Self {
            source: source.key(),
            target: target.key(),
        }
    }
}

/// Filtered topology ready for layout.
///
/// Nodes are in layout order: RCDs, MCBs and circuits in repository order,
/// then used rooms in repository order, then endpoints in repository order.
/// Circuit→room edges repeat once per surviving endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyGraph {
    pub nodes: Vec<TopologyNode>,
    pub edges: Vec<TopologyEdge>,
}

impl TopologyGraph {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, key: &str) -> Option<&TopologyNode> {
        self.nodes.iter().find(|n| n.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.node(key).is_some()
    }

    /// Every node key, for highlight resolution.
    #[must_use]
    pub fn keys(&self) -> BTreeSet<String> {
        self.nodes.iter().map(|n| n.key.clone()).collect()
    }

    pub fn nodes_in(&self, layer: Layer) -> impl Iterator<Item = &TopologyNode> {
        self.nodes.iter().filter(move |n| n.layer == layer)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Accumulates nodes and edges, refusing duplicate keys.
#[derive(Default)]
struct GraphAccumulator {
    graph: TopologyGraph,
    seen: HashSet<String>,
}

impl GraphAccumulator {
    fn node(&mut self, node: TopologyNode) {
        if self.seen.insert(node.key.clone()) {
            self.graph.nodes.push(node);
        } else {
            tracing::debug!(key = %node.key, "skipping duplicate node");
        }
    }

    fn edge(&mut self, source: EntityRef, target: EntityRef) {
        self.graph.edges.push(TopologyEdge::new(source, target));
    }

    /// Drop edges whose ends did not make it into the node set.
    fn finish(mut self) -> TopologyGraph {
        let before = self.graph.edges.len();
        let seen = &self.seen;
        self.graph
            .edges
            .retain(|e| seen.contains(&e.source) && seen.contains(&e.target));
        let dropped = before - self.graph.edges.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped edges with missing ends");
        }
        self.graph
    }
}

/// Derive the filtered topology graph from one snapshot.
#[must_use]
pub fn build(snapshot: &Snapshot, filter: &TopologyFilter) -> TopologyGraph {
    let resolved = filter.resolve(snapshot);
    build_resolved(snapshot, &resolved)
}

/// [`build`] with the filter already resolved against `snapshot`.
#[must_use]
pub fn build_resolved(snapshot: &Snapshot, filter: &ResolvedFilter) -> TopologyGraph {
    let devices: HashMap<EntityId, &Device> =
        snapshot.devices.iter().map(|d| (d.id, d)).collect();
    let is_mcb = |id: EntityId| devices.get(&id).is_some_and(|d| d.is_mcb());
    let is_rcd = |id: EntityId| devices.get(&id).is_some_and(|d| d.is_rcd());

    let mut acc = GraphAccumulator::default();

    // Layer 0: RCDs are never filtered.
    for rcd in snapshot.devices.iter().filter(|d| d.is_rcd()) {
        acc.node(TopologyNode::new(rcd.entity_ref(), Layer::Rcd, &rcd.label, None));
    }

    // Layer 1: MCBs in scope.
    for mcb in snapshot
        .devices
        .iter()
        .filter(|d| d.is_mcb() && filter.mcb_in_scope(d.id))
    {
        acc.node(TopologyNode::new(mcb.entity_ref(), Layer::Mcb, &mcb.label, None));
    }

    // Layer 2: circuits whose breaker is an MCB in scope.
    let circuits: HashMap<EntityId, &Circuit> = snapshot
        .circuits
        .iter()
        .filter(|c| {
            if is_mcb(c.mcb_device_id) {
                true
            } else {
                tracing::debug!(
                    circuit = c.id,
                    mcb = c.mcb_device_id,
                    "skipping circuit without a valid MCB"
                );
                false
            }
        })
        .map(|c| (c.id, c))
        .collect();
    let circuits_in_scope: Vec<&Circuit> = snapshot
        .circuits
        .iter()
        .filter(|c| circuits.contains_key(&c.id) && filter.mcb_in_scope(c.mcb_device_id))
        .collect();
    for circuit in &circuits_in_scope {
        acc.node(TopologyNode::new(
            circuit.entity_ref(),
            Layer::Circuit,
            &circuit.name,
            Some(circuit.confidence),
        ));
    }

    // Surviving endpoints decide which rooms appear.
    let surviving: Vec<&Endpoint> = snapshot
        .endpoints
        .iter()
        .filter(|e| {
            let Some(circuit) = circuits.get(&e.circuit_id) else {
                tracing::debug!(endpoint = e.id, circuit = e.circuit_id, "skipping endpoint without circuit");
                return false;
            };
            if snapshot.room(e.room_id).is_none() {
                tracing::debug!(endpoint = e.id, room = e.room_id, "skipping endpoint without room");
                return false;
            }
            filter.endpoint_passes(e, circuit.mcb_device_id)
        })
        .collect();
    let used_rooms: HashSet<EntityId> = surviving.iter().map(|e| e.room_id).collect();

    // Layer 3: used rooms, repository order.
    for room in snapshot.rooms.iter().filter(|r| used_rooms.contains(&r.id)) {
        acc.node(TopologyNode::new(room.entity_ref(), Layer::Room, &room.name, None));
    }

    // Layer 4: endpoints.
    for endpoint in &surviving {
        acc.node(TopologyNode::new(
            endpoint.entity_ref(),
            Layer::Endpoint,
            endpoint.display_name(),
            Some(endpoint.confidence),
        ));
    }

    for link in &snapshot.protection_links {
        if !is_rcd(link.rcd_device_id) || !is_mcb(link.mcb_device_id) {
            tracing::debug!(
                rcd = link.rcd_device_id,
                mcb = link.mcb_device_id,
                "skipping protection link with invalid ends"
            );
            continue;
        }
        if filter.mcb_in_scope(link.mcb_device_id) {
            acc.edge(
                EntityRef::device(link.rcd_device_id),
                EntityRef::device(link.mcb_device_id),
            );
        }
    }
    for circuit in &circuits_in_scope {
        acc.edge(EntityRef::device(circuit.mcb_device_id), circuit.entity_ref());
    }
    for endpoint in &surviving {
        let room = EntityRef::room(endpoint.room_id);
        acc.edge(EntityRef::circuit(endpoint.circuit_id), room);
        acc.edge(room, endpoint.entity_ref());
    }

    let graph = acc.finish();
    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        scoped = !filter.is_unrestricted(),
        only_uncertain = filter.only_uncertain,
        "built topology graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sk_core::entities::{Device, ProtectionLink, Room};
    use sk_core::enums::{DeviceKind, EndpointKind, Purpose};

    fn device(id: EntityId, kind: DeviceKind, label: &str) -> Device {
        Device {
            id,
            panel_id: 1,
            kind,
            label: label.into(),
            rating: String::new(),
            poles: 1,
            row: 0,
            col: 0,
            notes: String::new(),
        }
    }

    fn circuit(id: EntityId, mcb: EntityId) -> Circuit {
        Circuit {
            id,
            mcb_device_id: mcb,
            name: format!("SK {id}"),
            purpose: Purpose::Sockets,
            cable: String::new(),
            confidence: Confidence::Unknown,
            notes: String::new(),
        }
    }

    fn room(id: EntityId, name: &str) -> Room {
        Room {
            id,
            name: name.into(),
            floor: String::new(),
            notes: String::new(),
        }
    }

    fn endpoint(id: EntityId, circuit: EntityId, room: EntityId) -> Endpoint {
        Endpoint {
            id,
            circuit_id: circuit,
            room_id: room,
            kind: EndpointKind::Socket,
            description: String::new(),
            confidence: Confidence::Unknown,
            notes: String::new(),
        }
    }

    fn small() -> Snapshot {
        Snapshot {
            devices: vec![
                device(1, DeviceKind::Rcd, "FI"),
                device(2, DeviceKind::Mcb, "LS a"),
                device(3, DeviceKind::Mcb, "LS b"),
            ],
            protection_links: vec![ProtectionLink::new(1, 2), ProtectionLink::new(1, 3)],
            circuits: vec![circuit(10, 2), circuit(11, 3)],
            rooms: vec![room(20, "Bad"), room(21, "Flur"), room(22, "Leer")],
            endpoints: vec![endpoint(30, 10, 21), endpoint(31, 10, 20), endpoint(32, 11, 21)],
            ..Snapshot::default()
        }
    }

    #[test]
    fn empty_snapshot_builds_empty_graph() {
        let graph = build(&Snapshot::default(), &TopologyFilter::default());
        assert!(graph.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn nodes_follow_layer_then_repository_order() {
        let graph = build(&small(), &TopologyFilter::default());
        let keys: Vec<&str> = graph.nodes.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "device:1",
                "device:2",
                "device:3",
                "circuit:10",
                "circuit:11",
                "room:20",
                "room:21",
                "endpoint:30",
                "endpoint:31",
                "endpoint:32",
            ]
        );
    }

    #[test]
    fn circuit_to_room_edges_repeat_per_endpoint() {
        let mut snapshot = small();
        snapshot.endpoints.push(endpoint(33, 10, 21));
        let graph = build(&snapshot, &TopologyFilter::default());
        let repeated = graph
            .edges
            .iter()
            .filter(|e| e.source == "circuit:10" && e.target == "room:21")
            .count();
        assert_eq!(repeated, 2);
    }

    #[test]
    fn endpoint_title_falls_back_to_kind() {
        let graph = build(&small(), &TopologyFilter::default());
        assert_eq!(graph.node("endpoint:30").unwrap().title, "SOCKET");
        assert_eq!(graph.node("device:2").unwrap().title, "LS a");
    }

    #[test]
    fn dangling_references_are_skipped() {
        let mut snapshot = small();
        snapshot.endpoints.push(endpoint(40, 99, 20));
        snapshot.endpoints.push(endpoint(41, 10, 99));
        snapshot.circuits.push(circuit(12, 1));
        snapshot.endpoints.push(endpoint(42, 12, 22));
        snapshot.protection_links.push(ProtectionLink::new(2, 3));
        snapshot.protection_links.push(ProtectionLink::new(1, 77));

        let graph = build(&snapshot, &TopologyFilter::default());
        assert!(!graph.contains("endpoint:40"));
        assert!(!graph.contains("endpoint:41"));
        assert!(!graph.contains("circuit:12"));
        assert!(!graph.contains("endpoint:42"));
        assert!(!graph.contains("room:22"));
        assert!(!graph.edges.iter().any(|e| e.source == "device:2" && e.target == "device:3"));
        assert_eq!(graph, build(&small(), &TopologyFilter::default()));
    }

    #[test]
    fn duplicate_ids_produce_one_node() {
        let mut snapshot = small();
        snapshot.rooms.push(room(20, "Bad again"));
        let graph = build(&snapshot, &TopologyFilter::default());
        assert_eq!(graph.nodes_in(Layer::Room).count(), 2);
        assert_eq!(graph.node("room:20").unwrap().title, "Bad");
    }

    #[test]
    fn mcb_scope_keeps_rcds_and_drops_other_branches() {
        let graph = build(&small(), &TopologyFilter::new(false, Some(3)));
        let keys = graph.keys();
        assert!(keys.contains("device:1"));
        assert!(keys.contains("device:3"));
        assert!(!keys.contains("device:2"));
        assert!(!keys.contains("circuit:10"));
        assert!(!keys.contains("room:20"));
        assert_eq!(graph.nodes_in(Layer::Endpoint).count(), 1);
    }
}
