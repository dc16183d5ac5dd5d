//! Gaps used by the layered topology layout.

use serde::{Deserialize, Serialize};

const fn default_x_gap() -> f64 {
    200.0
}

const fn default_y_gap() -> f64 {
    90.0
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LayoutSettings {
    /// Horizontal distance between two layers.
    #[serde(default = "default_x_gap")]
    pub x_gap: f64,

    /// Vertical distance between two nodes of the same layer.
    #[serde(default = "default_y_gap")]
    pub y_gap: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            x_gap: default_x_gap(),
            y_gap: default_y_gap(),
        }
    }
}
