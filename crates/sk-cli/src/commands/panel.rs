use serde::Serialize;
use sk_core::enums::DeviceKind;
use sk_topology::{ViewEvent, ViewUpdate};

use crate::cli::root_commands::PanelArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::replay;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct PanelRow {
    pub key: String,
    pub kind: DeviceKind,
    pub label: String,
    pub rating: String,
    pub row: u32,
    pub col: u32,
    pub x: f64,
    pub y: f64,
    pub highlighted: bool,
}

#[derive(Debug, Serialize)]
pub struct PanelReport {
    pub panel: Option<String>,
    pub devices: Vec<PanelRow>,
}

/// Handle `skd panel`.
pub fn handle(args: &PanelArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let events: Vec<ViewEvent> = args.select.map(ViewEvent::Select).into_iter().collect();

    let snapshot = ctx.snapshot();
    let update = replay(&mut ctx.session(), &snapshot, &events);
    let name = update
        .panel_id
        .and_then(|id| snapshot.panel(id))
        .map(|p| p.name.clone());
    if name.is_none() {
        tracing::warn!("installation has no panel");
    }
    let report = PanelReport {
        panel: name,
        devices: panel_rows(&update),
    };

    match flags.format {
        OutputFormat::Table => output(&report.devices, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}

fn panel_rows(update: &ViewUpdate) -> Vec<PanelRow> {
    update
        .panel
        .iter()
        .map(|placed| PanelRow {
            key: placed.key.clone(),
            kind: placed.kind,
            label: placed.label.clone(),
            rating: placed.rating.clone(),
            row: placed.cell.row,
            col: placed.cell.col,
            x: placed.position.x,
            y: placed.position.y,
            highlighted: update.panel_highlight.contains(&placed.key),
        })
        .collect()
}
