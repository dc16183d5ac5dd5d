use serde::Serialize;
use sk_core::entities::{Circuit, Endpoint};
use sk_core::enums::{Confidence, DeviceKind, EntityKind};
use sk_core::identity::EntityRef;
use sk_core::inspect::InspectedEntity;
use sk_core::protection::{protected_mcbs, protecting_rcds};
use sk_core::snapshot::Snapshot;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InspectArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub key: String,
    pub kind: EntityKind,
    pub name: String,
    pub subtitle: String,
    pub notes: String,
    pub confidence: Option<Confidence>,
    /// Node keys one hop away in the protection chain.
    pub related: Vec<String>,
}

impl From<&InspectedEntity> for InspectReport {
    fn from(entity: &InspectedEntity) -> Self {
        let entity_ref = entity.entity_ref();
        Self {
            key: entity_ref.key(),
            kind: entity_ref.kind,
            name: entity.display_name().to_string(),
            subtitle: entity.subtitle().to_string(),
            notes: entity.notes().to_string(),
            confidence: entity.confidence(),
            related: Vec::new(),
        }
    }
}

impl InspectReport {
    fn with_related(mut self, snapshot: &Snapshot, entity: &InspectedEntity) -> Self {
        self.related = related_keys(snapshot, entity);
        self
    }
}

fn related_keys(snapshot: &Snapshot, entity: &InspectedEntity) -> Vec<String> {
    let refs: Vec<EntityRef> = match entity {
        InspectedEntity::Device(device) => match device.kind {
            DeviceKind::Rcd => protected_mcbs(&snapshot.protection_links, device.id)
                .into_iter()
                .map(EntityRef::device)
                .collect(),
            DeviceKind::Mcb => protecting_rcds(&snapshot.protection_links, device.id)
                .into_iter()
                .map(EntityRef::device)
                .chain(snapshot.circuit_of_mcb(device.id).map(Circuit::entity_ref))
                .collect(),
            _ => Vec::new(),
        },
        InspectedEntity::Circuit(circuit) => std::iter::once(EntityRef::device(circuit.mcb_device_id))
            .chain(snapshot.endpoints_of_circuit(circuit.id).map(Endpoint::entity_ref))
            .collect(),
        InspectedEntity::Room(room) => snapshot
            .endpoints
            .iter()
            .filter(|e| e.room_id == room.id)
            .map(Endpoint::entity_ref)
            .collect(),
        InspectedEntity::Endpoint(endpoint) => vec![
            EntityRef::circuit(endpoint.circuit_id),
            EntityRef::room(endpoint.room_id),
        ],
    };
    refs.iter().map(EntityRef::key).collect()
}

/// Handle `skd inspect <key>`.
pub fn handle(args: &InspectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entity = ctx.store.inspect(args.key)?;
    let report = InspectReport::from(&entity).with_related(&ctx.snapshot(), &entity);
    output(&report, flags.format)
}
