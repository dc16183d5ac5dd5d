use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Graph(args) => commands::graph::handle(args, ctx, flags),
        Commands::Panel(args) => commands::panel::handle(args, ctx, flags),
        Commands::Inspect(args) => commands::inspect::handle(args, ctx, flags),
    }
}
