//! Grid-snapped device placement on the spatial panel view.
//!
//! Devices persist a `(row, col)` cell. The view converts cells to pixels
//! with a fixed cell size and snaps drops back to the nearest cell.

use serde::{Deserialize, Serialize};
use sk_config::PanelSettings;
use sk_core::enums::DeviceKind;
use sk_core::identity::{EntityId, EntityRef};
use sk_core::snapshot::Snapshot;

use crate::layout::Point;

/// A persisted grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub row: u32,
    pub col: u32,
}

/// Cell size used for pixel/grid conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::from(&PanelSettings::default())
    }
}

impl From<&PanelSettings> for GridSpec {
    fn from(settings: &PanelSettings) -> Self {
        Self {
            cell_width: settings.cell_width,
            cell_height: settings.cell_height,
        }
    }
}

impl GridSpec {
    #[must_use]
    pub fn to_pixel(&self, cell: GridCell) -> Point {
        Point {
            x: f64::from(cell.col) * self.cell_width,
            y: f64::from(cell.row) * self.cell_height,
        }
    }

    /// Snap a drop position to the nearest cell.
    ///
    /// Halfway positions round to the even cell; negative positions clamp
    /// to row/col 0.
    #[must_use]
    pub fn to_grid(&self, at: Point) -> GridCell {
        GridCell {
            row: snap(at.y / self.cell_height),
            col: snap(at.x / self.cell_width),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn snap(cells: f64) -> u32 {
    let rounded = cells.round_ties_even();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else if rounded >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// A device positioned on the panel view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedDevice {
    pub key: String,
    pub device_id: EntityId,
    pub kind: DeviceKind,
    pub label: String,
    pub rating: String,
    pub cell: GridCell,
    pub position: Point,
}

/// Devices of `panel_id` at their stored cells, in repository order.
#[must_use]
pub fn place_panel(snapshot: &Snapshot, panel_id: EntityId, grid: &GridSpec) -> Vec<PlacedDevice> {
    snapshot
        .devices_on_panel(panel_id)
        .map(|d| {
            let cell = GridCell {
                row: d.row,
                col: d.col,
            };
            PlacedDevice {
                key: EntityRef::device(d.id).key(),
                device_id: d.id,
                kind: d.kind,
                label: d.label.clone(),
                rating: d.rating.clone(),
                cell,
                position: grid.to_pixel(cell),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn cell_to_pixel_uses_separate_axes() {
        let grid = GridSpec::default();
        assert_eq!(
            grid.to_pixel(GridCell { row: 2, col: 3 }),
            Point { x: 420.0, y: 160.0 }
        );
    }

    #[rstest]
    #[case::exact(280.0, 80.0, 1, 2)]
    #[case::nearest(300.0, 110.0, 1, 2)]
    #[case::half_rounds_to_even_down(70.0, 40.0, 0, 0)]
    #[case::half_rounds_to_even_up(210.0, 120.0, 2, 2)]
    #[case::negative_clamps(-500.0, -1.0, 0, 0)]
    fn snapping(#[case] x: f64, #[case] y: f64, #[case] row: u32, #[case] col: u32) {
        let grid = GridSpec::default();
        assert_eq!(grid.to_grid(Point { x, y }), GridCell { row, col });
    }

    #[test]
    fn snapping_a_placed_cell_is_identity() {
        let grid = GridSpec::from(&PanelSettings {
            cell_width: 100.0,
            cell_height: 50.0,
        });
        let cell = GridCell { row: 4, col: 7 };
        assert_eq!(grid.to_grid(grid.to_pixel(cell)), cell);
    }
}
