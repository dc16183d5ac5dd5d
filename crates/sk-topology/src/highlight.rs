//! Selection → emphasized key set, shared by the graph and panel views.

use std::collections::BTreeSet;

use sk_core::enums::{DeviceKind, EntityKind};
use sk_core::identity::EntityRef;
use sk_core::protection::protected_mcbs;
use sk_core::snapshot::Snapshot;

/// How a device selection spreads to related nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Only the selected node.
    SelfOnly,
    /// The selected RCD plus every breaker linked to it (one hop).
    ProtectedBreakers,
}

impl Propagation {
    #[must_use]
    pub const fn for_device(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Rcd => Self::ProtectedBreakers,
            DeviceKind::Mcb
            | DeviceKind::Meter
            | DeviceKind::MainSwitch
            | DeviceKind::Spd
            | DeviceKind::Other => Self::SelfOnly,
        }
    }
}

/// Keys to emphasize for `selection`, restricted to `present` keys.
///
/// A selection that does not resolve to a present key highlights nothing.
#[must_use]
pub fn highlight(
    snapshot: &Snapshot,
    selection: Option<EntityRef>,
    present: &BTreeSet<String>,
) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    let Some(selected) = selection else {
        return keys;
    };
    let key = selected.key();
    if !present.contains(&key) {
        return keys;
    }
    keys.insert(key);

    if selected.kind != EntityKind::Device {
        return keys;
    }
    let Some(device) = snapshot.device(selected.id) else {
        return keys;
    };
    match Propagation::for_device(device.kind) {
        Propagation::SelfOnly => {}
        Propagation::ProtectedBreakers => {
            keys.extend(
                protected_mcbs(&snapshot.protection_links, device.id)
                    .into_iter()
                    .map(|mcb| EntityRef::device(mcb).key())
                    .filter(|k| present.contains(k)),
            );
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sk_core::entities::{Device, ProtectionLink};

    fn device(id: i64, kind: DeviceKind) -> Device {
        Device {
            id,
            panel_id: 1,
            kind,
            label: String::new(),
            rating: String::new(),
            poles: 1,
            row: 0,
            col: 0,
            notes: String::new(),
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            devices: vec![
                device(1, DeviceKind::Rcd),
                device(2, DeviceKind::Mcb),
                device(3, DeviceKind::Mcb),
                device(4, DeviceKind::Mcb),
            ],
            protection_links: vec![ProtectionLink::new(1, 2), ProtectionLink::new(1, 3)],
            ..Snapshot::default()
        }
    }

    fn keys(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn rcd_selection_reaches_linked_present_breakers() {
        let present = keys(&["device:1", "device:2", "device:4"]);
        let lit = highlight(&snapshot(), Some(EntityRef::device(1)), &present);
        assert_eq!(lit, keys(&["device:1", "device:2"]));
    }

    #[rstest]
    #[case::mcb(EntityRef::device(2), &["device:2"])]
    #[case::room(EntityRef::room(7), &["room:7"])]
    #[case::absent(EntityRef::circuit(9), &[])]
    fn non_rcd_selections_light_themselves(
        #[case] selection: EntityRef,
        #[case] expected: &[&str],
    ) {
        let present = keys(&["device:1", "device:2", "device:3", "room:7"]);
        assert_eq!(highlight(&snapshot(), Some(selection), &present), keys(expected));
    }

    #[test]
    fn absent_rcd_lights_nothing() {
        let present = keys(&["device:2", "device:3"]);
        assert!(highlight(&snapshot(), Some(EntityRef::device(1)), &present).is_empty());
    }

    #[test]
    fn no_selection_lights_nothing() {
        assert!(highlight(&snapshot(), None, &keys(&["device:1"])).is_empty());
    }

    #[test]
    fn propagation_rule_per_kind() {
        assert_eq!(Propagation::for_device(DeviceKind::Rcd), Propagation::ProtectedBreakers);
        assert_eq!(Propagation::for_device(DeviceKind::Spd), Propagation::SelfOnly);
    }
}
