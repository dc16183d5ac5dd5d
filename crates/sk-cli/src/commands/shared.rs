use sk_core::snapshot::Snapshot;
use sk_topology::{TopologySession, ViewEvent, ViewUpdate};

/// Feed `events` through the session and return the final view.
///
/// With no events the current state is rebuilt once.
pub fn replay(session: &mut TopologySession, snapshot: &Snapshot, events: &[ViewEvent]) -> ViewUpdate {
    let mut last = None;
    for event in events {
        last = Some(session.handle(snapshot, *event));
    }
    last.unwrap_or_else(|| session.rebuild(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_core::identity::EntityRef;
    use sk_store::demo::seed_demo;
    use sk_store::repository::Repository;

    #[test]
    fn empty_replay_rebuilds_current_state() {
        let snapshot = seed_demo().snapshot();
        let mut session = TopologySession::default();
        let update = replay(&mut session, &snapshot, &[]);
        assert_eq!(update.graph.nodes.len(), 51);
        assert!(update.selection.is_none());
    }

    #[test]
    fn replay_returns_last_update() {
        let snapshot = seed_demo().snapshot();
        let mut session = TopologySession::default();
        let update = replay(
            &mut session,
            &snapshot,
            &[
                ViewEvent::SetOnlyUncertain(true),
                ViewEvent::Select(EntityRef::device(2)),
            ],
        );
        assert!(update.filter.only_uncertain);
        assert_eq!(update.selection, Some(EntityRef::device(2)));
    }
}
