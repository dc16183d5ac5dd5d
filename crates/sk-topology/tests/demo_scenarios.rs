//! Topology properties checked against the demo installation.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

use sk_core::enums::{Confidence, EndpointKind};
use sk_core::identity::EntityRef;
use sk_core::snapshot::Snapshot;
use sk_store::demo::seed_demo;
use sk_store::repository::Repository;
use sk_topology::layout::layered_positions;
use sk_topology::{Layer, TopologyFilter, TopologySession, ViewEvent, build};

fn verification_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
}

fn demo() -> Snapshot {
    seed_demo().snapshot()
}

fn count(graph: &sk_topology::TopologyGraph, layer: Layer) -> usize {
    graph.nodes_in(layer).count()
}

#[test]
fn unfiltered_demo_has_every_entity() {
    let graph = build(&demo(), &TopologyFilter::default());

    assert_eq!(count(&graph, Layer::Rcd), 2);
    assert_eq!(count(&graph, Layer::Mcb), 10);
    assert_eq!(count(&graph, Layer::Circuit), 6);
    assert_eq!(count(&graph, Layer::Room), 8);
    assert_eq!(count(&graph, Layer::Endpoint), 25);
    assert_eq!(graph.nodes.len(), 51);
    // 10 links + 6 breaker feeds + 25 circuit→room + 25 room→endpoint
    assert_eq!(graph.edges.len(), 66);
}

#[rstest]
#[case::unfiltered(TopologyFilter::default())]
#[case::only_uncertain(TopologyFilter::new(true, None))]
#[case::rcd_scope(TopologyFilter::new(false, Some(1)))]
#[case::mcb_scope(TopologyFilter::new(true, Some(8)))]
fn structural_invariants_hold(#[case] filter: TopologyFilter) {
    let graph = build(&demo(), &filter);

    let keys: HashSet<&str> = graph.nodes.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys.len(), graph.nodes.len(), "duplicate node keys");

    for edge in &graph.edges {
        let source = graph.node(&edge.source).expect("dangling edge source");
        let target = graph.node(&edge.target).expect("dangling edge target");
        assert_eq!(
            source.layer.depth() + 1,
            target.layer.depth(),
            "edge {} -> {} skips a layer",
            edge.source,
            edge.target
        );
    }
}

#[test]
fn rcd_scope_keeps_only_its_branch() {
    let graph = build(&demo(), &TopologyFilter::new(false, Some(1)));

    assert_eq!(count(&graph, Layer::Rcd), 2);
    let mcbs: BTreeSet<String> = graph.nodes_in(Layer::Mcb).map(|n| n.title.clone()).collect();
    assert_eq!(
        mcbs,
        ["LS 1", "LS 2", "LS 3", "LS 4", "LS 5"]
            .into_iter()
            .map(String::from)
            .collect()
    );
    assert_eq!(count(&graph, Layer::Circuit), 5);
    assert_eq!(count(&graph, Layer::Endpoint), 21);
    assert_eq!(count(&graph, Layer::Room), 8);
}

#[test]
fn second_rcd_scope_reaches_one_circuit() {
    let graph = build(&demo(), &TopologyFilter::new(false, Some(2)));

    assert_eq!(count(&graph, Layer::Mcb), 5);
    assert_eq!(count(&graph, Layer::Circuit), 1);
    assert!(graph.contains("circuit:6"));
    assert_eq!(count(&graph, Layer::Endpoint), 4);
    let rooms: Vec<&str> = graph.nodes_in(Layer::Room).map(|n| n.key.as_str()).collect();
    // Flur, Kinderzimmer, Garage, Garten in repository order
    assert_eq!(rooms, vec!["room:1", "room:6", "room:7", "room:8"]);
}

#[test]
fn mcb_scope_keeps_single_breaker() {
    let graph = build(&demo(), &TopologyFilter::new(false, Some(4)));

    assert_eq!(count(&graph, Layer::Mcb), 1);
    assert!(graph.contains("device:4"));
    assert_eq!(count(&graph, Layer::Circuit), 1);
    assert!(graph.contains("circuit:2"));
    assert!(graph.edges.iter().any(|e| e.source == "device:1" && e.target == "device:4"));
    assert!(!graph.edges.iter().any(|e| e.target == "device:3"));
}

#[test]
fn only_uncertain_hides_confirmed_endpoint_and_its_sole_room() {
    let mut store = seed_demo();
    let cellar = store.add_room("Keller", "UG").unwrap();
    let only = store
        .add_endpoint(2, cellar.id, EndpointKind::Light, "Kellerlicht")
        .unwrap();
    store
        .apply_verification(2, &BTreeSet::from([only.id]), verification_date())
        .unwrap();
    let snapshot = store.snapshot();
    let endpoint_key = only.entity_ref().key();
    let room_key = cellar.entity_ref().key();

    let all = build(&snapshot, &TopologyFilter::default());
    assert!(all.contains(&endpoint_key));
    assert!(all.contains(&room_key));

    let uncertain = build(&snapshot, &TopologyFilter::new(true, None));
    assert!(!uncertain.contains(&endpoint_key));
    assert!(!uncertain.contains(&room_key));
    assert_eq!(count(&uncertain, Layer::Endpoint), 25);
    assert_eq!(count(&uncertain, Layer::Room), 8);
    // The circuit stays even though it lost an endpoint.
    assert_eq!(count(&uncertain, Layer::Circuit), 6);
}

#[test]
fn confirm_then_uncheck_yields_likely() {
    let mut store = seed_demo();
    store
        .apply_verification(3, &BTreeSet::from([10]), verification_date())
        .unwrap();
    store
        .apply_verification(3, &BTreeSet::new(), verification_date())
        .unwrap();

    let snapshot = store.snapshot();
    assert_eq!(snapshot.endpoint(10).unwrap().confidence, Confidence::Likely);

    let graph = build(&snapshot, &TopologyFilter::new(true, None));
    assert!(graph.contains("endpoint:10"));
}

#[test]
fn layout_is_deterministic() {
    let snapshot = demo();
    let graph = build(&snapshot, &TopologyFilter::default());
    let settings = sk_config::LayoutSettings::default();

    let first = layered_positions(&graph.nodes, &settings);
    let second = layered_positions(&build(&snapshot, &TopologyFilter::default()).nodes, &settings);
    assert_eq!(first, second);

    assert_eq!(first["device:2"].y, 90.0);
    assert_eq!(first["endpoint:25"].x, 800.0);
    assert_eq!(first["endpoint:25"].y, 24.0 * 90.0);
}

#[test]
fn selecting_rcd_syncs_both_views() {
    let snapshot = demo();
    let mut session = TopologySession::default();

    let update = session.handle(&snapshot, ViewEvent::Select(EntityRef::device(1)));

    let expected: BTreeSet<String> = [1, 3, 4, 5, 6, 7]
        .into_iter()
        .map(|id| EntityRef::device(id).key())
        .collect();
    assert_eq!(update.graph_highlight, expected);
    assert_eq!(update.panel_highlight, expected);
    assert_eq!(update.allowed_mcb_ids, Some(BTreeSet::from([3, 4, 5, 6, 7])));
    assert_eq!(update.panel.len(), 12);
}

#[test]
fn selecting_an_endpoint_clears_scope_and_highlights_it_in_the_graph() {
    let snapshot = demo();
    let mut session = TopologySession::default();
    session.handle(&snapshot, ViewEvent::Select(EntityRef::device(2)));

    let update = session.handle(&snapshot, ViewEvent::Select(EntityRef::endpoint(3)));
    assert_eq!(update.allowed_mcb_ids, None);
    assert_eq!(update.graph.nodes.len(), 51);
    assert_eq!(update.graph_highlight, BTreeSet::from(["endpoint:3".to_string()]));
    assert!(update.panel_highlight.is_empty());
}

#[test]
fn circuit_selection_widens_scope_and_missing_entity_lights_nothing() {
    let snapshot = demo();
    let mut session = TopologySession::default();
    session.handle(&snapshot, ViewEvent::Select(EntityRef::device(4)));

    // Circuit 1 hangs off LS 1, outside the LS 2 scope; selecting it clears
    // the scope so it becomes visible again.
    let update = session.handle(&snapshot, ViewEvent::Select(EntityRef::circuit(1)));
    assert!(update.graph_highlight.contains("circuit:1"));

    let update = session.handle(&snapshot, ViewEvent::Select(EntityRef::room(99)));
    assert!(update.graph_highlight.is_empty());
}

#[test]
fn data_changed_rebuilds_from_new_snapshot() {
    let mut store = seed_demo();
    let mut session = TopologySession::default();
    let before = session.handle(&store.snapshot(), ViewEvent::DataChanged);

    store.delete(EntityRef::device(3)).unwrap();
    let after = session.handle(&store.snapshot(), ViewEvent::DataChanged);

    assert_eq!(before.graph.nodes.len(), 51);
    // LS 1, circuit 1 and its five endpoints are gone; Flur keeps endpoint 25.
    assert_eq!(after.graph.nodes.len(), 51 - 7);
    assert_eq!(after.panel.len(), 11);
}

