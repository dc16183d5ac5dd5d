//! Endpoint and breaker filtering for the topology graph.
//!
//! Two predicates are ANDed per endpoint: the uncertainty toggle and the
//! device scope. The scope resolves to a set of allowed MCB ids once per
//! rebuild; everything downstream only asks [`ResolvedFilter::mcb_in_scope`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sk_core::entities::Endpoint;
use sk_core::enums::DeviceKind;
use sk_core::identity::EntityId;
use sk_core::protection::protected_mcbs;
use sk_core::snapshot::Snapshot;

/// User-facing filter state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyFilter {
    /// Hide endpoints that are already `CONFIRMED`.
    pub only_uncertain: bool,
    /// Restrict the graph to the breakers behind this device.
    pub scope_device_id: Option<EntityId>,
}

impl TopologyFilter {
    #[must_use]
    pub const fn new(only_uncertain: bool, scope_device_id: Option<EntityId>) -> Self {
        Self {
            only_uncertain,
            scope_device_id,
        }
    }

    #[must_use]
    pub fn resolve(&self, snapshot: &Snapshot) -> ResolvedFilter {
        ResolvedFilter {
            only_uncertain: self.only_uncertain,
            allowed_mcb_ids: allowed_mcb_ids(snapshot, self.scope_device_id),
        }
    }
}

/// Resolve a device scope to the MCB ids it admits.
///
/// | scope                         | result                    |
/// |-------------------------------|---------------------------|
/// | none, missing, other kinds    | `None` (no restriction)   |
/// | RCD                           | linked MCBs (may be empty)|
/// | MCB                           | `{id}`                    |
#[must_use]
pub fn allowed_mcb_ids(
    snapshot: &Snapshot,
    scope_device_id: Option<EntityId>,
) -> Option<BTreeSet<EntityId>> {
    let device = snapshot.device(scope_device_id?)?;
    match device.kind {
        DeviceKind::Rcd => Some(protected_mcbs(&snapshot.protection_links, device.id)),
        DeviceKind::Mcb => Some(BTreeSet::from([device.id])),
        DeviceKind::Meter | DeviceKind::MainSwitch | DeviceKind::Spd | DeviceKind::Other => None,
    }
}

/// Filter state resolved against one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedFilter {
    pub only_uncertain: bool,
    pub allowed_mcb_ids: Option<BTreeSet<EntityId>>,
}

impl ResolvedFilter {
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.allowed_mcb_ids.is_none()
    }

    #[must_use]
    pub fn mcb_in_scope(&self, mcb_device_id: EntityId) -> bool {
        self.allowed_mcb_ids
            .as_ref()
            .is_none_or(|ids| ids.contains(&mcb_device_id))
    }

    /// Whether an endpoint fed through `mcb_device_id` survives both predicates.
    #[must_use]
    pub fn endpoint_passes(&self, endpoint: &Endpoint, mcb_device_id: EntityId) -> bool {
        if self.only_uncertain && !endpoint.confidence.is_uncertain() {
            return false;
        }
        self.mcb_in_scope(mcb_device_id)
    }
}
