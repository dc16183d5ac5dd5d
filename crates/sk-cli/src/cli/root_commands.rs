use clap::{Args, Subcommand};
use sk_core::identity::EntityRef;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Print the layered topology graph.
    Graph(GraphArgs),
    /// Print device placement on the first panel.
    Panel(PanelArgs),
    /// Show one entity and its neighbours in the protection chain.
    Inspect(InspectArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GraphArgs {
    /// Hide endpoints that are already confirmed.
    #[arg(long)]
    pub only_uncertain: bool,

    /// Select an entity (`device:1`, `room:3`, ...). Devices scope the graph.
    #[arg(long)]
    pub select: Option<EntityRef>,
}

#[derive(Clone, Debug, Args)]
pub struct PanelArgs {
    /// Select an entity to highlight on the panel.
    #[arg(long)]
    pub select: Option<EntityRef>,
}

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Entity key, e.g. `endpoint:12`.
    pub key: EntityRef,
}
