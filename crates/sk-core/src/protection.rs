//! Protection-link reachability and RCD mapping plans.
//!
//! The only traversal the topology needs is one hop from an RCD to the
//! breakers it supervises. Everything here uses set semantics, so a breaker
//! listed under two RCDs (allowed by the pair-only uniqueness) is harmless.

use std::collections::BTreeSet;

use crate::entities::ProtectionLink;
use crate::identity::EntityId;

/// MCB ids linked to `rcd_device_id`.
#[must_use]
pub fn protected_mcbs(links: &[ProtectionLink], rcd_device_id: EntityId) -> BTreeSet<EntityId> {
    links
        .iter()
        .filter(|l| l.rcd_device_id == rcd_device_id)
        .map(|l| l.mcb_device_id)
        .collect()
}

/// RCD ids supervising `mcb_device_id`.
#[must_use]
pub fn protecting_rcds(links: &[ProtectionLink], mcb_device_id: EntityId) -> BTreeSet<EntityId> {
    links
        .iter()
        .filter(|l| l.mcb_device_id == mcb_device_id)
        .map(|l| l.rcd_device_id)
        .collect()
}

/// Link changes needed to make one RCD protect exactly a desired MCB set.
///
/// Both sides are computed by set difference, so applying a plan never
/// inserts a pair that already exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPlan {
    pub rcd_device_id: EntityId,
    pub to_add: BTreeSet<EntityId>,
    pub to_remove: BTreeSet<EntityId>,
}

impl LinkPlan {
    /// Diff the RCD's existing links against the desired breaker set.
    #[must_use]
    pub fn diff(
        links: &[ProtectionLink],
        rcd_device_id: EntityId,
        desired: &BTreeSet<EntityId>,
    ) -> Self {
        let existing = protected_mcbs(links, rcd_device_id);
        Self {
            rcd_device_id,
            to_add: desired.difference(&existing).copied().collect(),
            to_remove: existing.difference(desired).copied().collect(),
        }
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Links to insert, in ascending MCB order.
    pub fn links_to_add(&self) -> impl Iterator<Item = ProtectionLink> + '_ {
        self.to_add
            .iter()
            .map(|mcb| ProtectionLink::new(self.rcd_device_id, *mcb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn links() -> Vec<ProtectionLink> {
        vec![
            ProtectionLink::new(1, 3),
            ProtectionLink::new(1, 4),
            ProtectionLink::new(2, 5),
            ProtectionLink::new(2, 4),
        ]
    }

    #[test]
    fn reachability_is_one_hop() {
        assert_eq!(protected_mcbs(&links(), 1), BTreeSet::from([3, 4]));
        assert_eq!(protected_mcbs(&links(), 2), BTreeSet::from([4, 5]));
        assert!(protected_mcbs(&links(), 9).is_empty());
    }

    #[test]
    fn breaker_under_two_rcds_is_reported_by_both() {
        assert_eq!(protecting_rcds(&links(), 4), BTreeSet::from([1, 2]));
        assert_eq!(protecting_rcds(&links(), 3), BTreeSet::from([1]));
    }

    #[test]
    fn diff_computes_both_differences() {
        let plan = LinkPlan::diff(&links(), 1, &BTreeSet::from([4, 6, 7]));
        assert_eq!(plan.to_add, BTreeSet::from([6, 7]));
        assert_eq!(plan.to_remove, BTreeSet::from([3]));
        assert_eq!(
            plan.links_to_add().collect::<Vec<_>>(),
            vec![ProtectionLink::new(1, 6), ProtectionLink::new(1, 7)]
        );
    }

    #[test]
    fn existing_pairs_are_never_re_added() {
        let plan = LinkPlan::diff(&links(), 1, &BTreeSet::from([3, 4]));
        assert!(plan.is_noop());
    }

    #[test]
    fn other_rcds_links_are_ignored() {
        let plan = LinkPlan::diff(&links(), 2, &BTreeSet::new());
        assert_eq!(plan.to_remove, BTreeSet::from([4, 5]));
        assert!(plan.to_add.is_empty());
    }
}
