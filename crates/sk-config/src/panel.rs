//! Grid cell size of the spatial panel view.

use serde::{Deserialize, Serialize};

const fn default_cell_width() -> f64 {
    140.0
}

const fn default_cell_height() -> f64 {
    80.0
}

/// Device cards are wider than tall, so the two axes have separate gaps.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PanelSettings {
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,

    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
        }
    }
}
