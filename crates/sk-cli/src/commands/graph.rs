use std::collections::BTreeSet;

use serde::Serialize;
use sk_core::enums::Confidence;
use sk_core::identity::EntityId;
use sk_topology::{Layer, TopologyEdge, ViewEvent, ViewUpdate};

use crate::cli::root_commands::GraphArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::replay;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct GraphNodeRow {
    pub key: String,
    pub layer: Layer,
    pub title: String,
    pub confidence: Option<Confidence>,
    pub x: f64,
    pub y: f64,
    pub highlighted: bool,
}

#[derive(Debug, Serialize)]
pub struct LayerCount {
    pub layer: Layer,
    pub nodes: usize,
}

#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub allowed_mcb_ids: Option<BTreeSet<EntityId>>,
    pub layers: Vec<LayerCount>,
    pub nodes: Vec<GraphNodeRow>,
    pub edges: Vec<TopologyEdge>,
}

/// Handle `skd graph`.
pub fn handle(args: &GraphArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut events = Vec::new();
    if args.only_uncertain {
        events.push(ViewEvent::SetOnlyUncertain(true));
    }
    if let Some(selection) = args.select {
        events.push(ViewEvent::Select(selection));
    }

    let snapshot = ctx.snapshot();
    let update = replay(&mut ctx.session(), &snapshot, &events);
    let report = graph_report(update);

    match flags.format {
        OutputFormat::Table => {
            output(&report.layers, flags.format)?;
            println!();
            output(&report.nodes, flags.format)?;
            println!();
            output(&report.edges, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}

fn graph_report(update: ViewUpdate) -> GraphReport {
    let layers = Layer::ALL
        .into_iter()
        .map(|layer| LayerCount {
            layer,
            nodes: update.graph.nodes_in(layer).count(),
        })
        .collect();

    let nodes = update
        .graph
        .nodes
        .iter()
        .map(|node| {
            let (x, y) = update
                .positions
                .get(&node.key)
                .map_or((0.0, 0.0), |p| (p.x, p.y));
            GraphNodeRow {
                key: node.key.clone(),
                layer: node.layer,
                title: node.title.clone(),
                confidence: node.confidence,
                x,
                y,
                highlighted: update.graph_highlight.contains(&node.key),
            }
        })
        .collect();

    GraphReport {
        allowed_mcb_ids: update.allowed_mcb_ids,
        layers,
        nodes,
        edges: update.graph.edges,
    }
}
