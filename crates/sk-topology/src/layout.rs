//! Deterministic layered coordinates for the topology graph.
//!
//! Nodes are partitioned by layer, keeping their input order inside each
//! layer. Column `x` follows the layer, row `y` the position within it.
//! The function is pure: equal input yields equal output.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use sk_config::LayoutSettings;

use crate::builder::{Layer, TopologyNode};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// `x = layer * x_gap`, `y = index_in_layer * y_gap`.
#[must_use]
pub fn layered_positions(
    nodes: &[TopologyNode],
    settings: &LayoutSettings,
) -> BTreeMap<String, Point> {
    let mut next_row: HashMap<Layer, u32> = HashMap::new();
    let mut positions = BTreeMap::new();
    for node in nodes {
        let row = next_row.entry(node.layer).or_insert(0);
        positions.insert(
            node.key.clone(),
            Point {
                x: f64::from(node.layer.depth()) * settings.x_gap,
                y: f64::from(*row) * settings.y_gap,
            },
        );
        *row += 1;
    }
    positions
}
