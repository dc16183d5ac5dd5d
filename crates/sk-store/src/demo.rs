//! The demo installation a fresh project starts with.
//!
//! One sub-distribution with two RCDs and ten MCBs, eight rooms, six circuits
//! and 25 endpoints. Everything starts out `UNKNOWN`.

use sk_core::entities::{Circuit, Device, Endpoint, Panel, ProtectionLink, Room};
use sk_core::enums::{Confidence, DeviceKind, EndpointKind, Purpose};
use sk_core::identity::EntityId;
use sk_core::snapshot::Snapshot;

use crate::EntityStore;

const ROOM_NAMES: [&str; 8] = [
    "Flur",
    "Küche",
    "Wohnzimmer",
    "Bad",
    "Schlafzimmer",
    "Kinderzimmer",
    "Garage",
    "Garten",
];

const RCD_COUNT: u32 = 2;
const MCB_COUNT: u32 = 10;
const MCBS_PER_RCD: usize = 5;
const CIRCUIT_COUNT: usize = 6;

fn device(
    id: EntityId,
    kind: DeviceKind,
    label: String,
    rating: &str,
    poles: u8,
    (row, col): (u32, u32),
) -> Device {
    Device {
        id,
        panel_id: 1,
        kind,
        label,
        rating: rating.to_string(),
        poles,
        row,
        col,
        notes: String::new(),
    }
}

/// Build the demo installation with ids assigned from 1 per table.
#[must_use]
pub fn demo_snapshot() -> Snapshot {
    let panels = vec![Panel {
        id: 1,
        name: "UV EG".into(),
        location: "Erdgeschoss".into(),
    }];

    let mut devices = Vec::new();
    let mut next_device: EntityId = 1;
    for i in 0..RCD_COUNT {
        devices.push(device(
            next_device,
            DeviceKind::Rcd,
            format!("FI {}", i + 1),
            "40A/30mA",
            4,
            (0, i),
        ));
        next_device += 1;
    }
    let mcb_ids: Vec<EntityId> = (0..MCB_COUNT)
        .map(|i| {
            let id = next_device;
            next_device += 1;
            devices.push(device(
                id,
                DeviceKind::Mcb,
                format!("LS {}", i + 1),
                "B16",
                1,
                (1 + i / 5, i % 5),
            ));
            id
        })
        .collect();

    let rooms: Vec<Room> = ROOM_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| Room {
            id,
            name: (*name).to_string(),
            floor: String::new(),
            notes: String::new(),
        })
        .collect();

    let circuits: Vec<Circuit> = mcb_ids
        .iter()
        .take(CIRCUIT_COUNT)
        .zip(1..)
        .enumerate()
        .map(|(i, (mcb, id))| Circuit {
            id,
            mcb_device_id: *mcb,
            name: format!("Stromkreis {}", i + 1),
            purpose: if i % 2 == 0 {
                Purpose::Sockets
            } else {
                Purpose::Lights
            },
            cable: String::new(),
            confidence: Confidence::Unknown,
            notes: String::new(),
        })
        .collect();

    let mut endpoints = Vec::new();
    let mut next_endpoint: EntityId = 1;
    for (idx, circuit) in circuits.iter().enumerate() {
        let count = if idx == 0 { 5 } else { 4 };
        for j in 0..count {
            let id = next_endpoint;
            next_endpoint += 1;
            endpoints.push(Endpoint {
                id,
                circuit_id: circuit.id,
                room_id: rooms[(idx + j) % rooms.len()].id,
                kind: if j % 2 == 0 {
                    EndpointKind::Socket
                } else {
                    EndpointKind::Light
                },
                description: format!("Endpoint {id}"),
                confidence: Confidence::Unknown,
                notes: String::new(),
            });
        }
    }

    let protection_links = mcb_ids
        .iter()
        .enumerate()
        .map(|(i, mcb)| {
            let rcd = devices[i / MCBS_PER_RCD].id;
            ProtectionLink::new(rcd, *mcb)
        })
        .collect();

    Snapshot {
        panels,
        devices,
        protection_links,
        circuits,
        rooms,
        endpoints,
    }
}

/// A store holding the demo installation.
#[must_use]
pub fn seed_demo() -> EntityStore {
    let store = EntityStore::from_snapshot(demo_snapshot());
    tracing::debug!("seeded demo installation");
    store
}
