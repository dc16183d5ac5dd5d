//! Protection link repository: which breakers each RCD supervises.

use std::collections::BTreeSet;

use sk_core::entities::ProtectionLink;
use sk_core::identity::EntityId;
use sk_core::protection::{LinkPlan, protected_mcbs};

use crate::EntityStore;
use crate::error::StoreError;

impl EntityStore {
    /// MCB ids currently linked to an RCD. Pre-checks the mapping form.
    #[must_use]
    pub fn linked_mcbs(&self, rcd_device_id: EntityId) -> BTreeSet<EntityId> {
        protected_mcbs(&self.tables.protection_links, rcd_device_id)
    }

    /// Make `rcd_device_id` protect exactly `desired`.
    ///
    /// Links no longer desired are removed; only missing pairs are inserted.
    /// Links of other RCDs are untouched. Returns the applied plan.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidReference` if the RCD is not an RCD device
    /// or any desired id is not an MCB device. Nothing is changed then.
    pub fn set_protected_breakers(
        &mut self,
        rcd_device_id: EntityId,
        desired: &BTreeSet<EntityId>,
    ) -> Result<LinkPlan, StoreError> {
        if !self.tables.device(rcd_device_id).is_some_and(|d| d.is_rcd()) {
            return Err(StoreError::InvalidReference(format!(
                "device {rcd_device_id} is not an RCD"
            )));
        }
        if let Some(bad) = desired
            .iter()
            .find(|id| !self.tables.device(**id).is_some_and(|d| d.is_mcb()))
        {
            tracing::warn!(rcd_device_id, mcb = bad, "rejected link to non-MCB device");
            return Err(StoreError::InvalidReference(format!(
                "device {bad} is not an MCB"
            )));
        }

        let plan = LinkPlan::diff(&self.tables.protection_links, rcd_device_id, desired);
        self.tables.protection_links.retain(|l| {
            l.rcd_device_id != rcd_device_id || !plan.to_remove.contains(&l.mcb_device_id)
        });
        self.tables.protection_links.extend(plan.links_to_add());
        tracing::info!(
            rcd_device_id,
            added = plan.to_add.len(),
            removed = plan.to_remove.len(),
            "updated protection links"
        );
        Ok(plan)
    }

    /// Insert one link unless the pair already exists.
    ///
    /// # Errors
    ///
    /// Same as [`EntityStore::set_protected_breakers`].
    pub fn link(&mut self, rcd_device_id: EntityId, mcb_device_id: EntityId) -> Result<(), StoreError> {
        let mut desired = self.linked_mcbs(rcd_device_id);
        desired.insert(mcb_device_id);
        self.set_protected_breakers(rcd_device_id, &desired).map(|_| ())
    }

    #[must_use]
    pub fn has_link(&self, rcd_device_id: EntityId, mcb_device_id: EntityId) -> bool {
        self.tables
            .protection_links
            .contains(&ProtectionLink::new(rcd_device_id, mcb_device_id))
    }
}
