use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Upload(args) => commands::analyze::handle_upload(&args, ctx, flags).await,
        Commands::Url(args) => commands::analyze::handle_url(&args, ctx, flags).await,
        Commands::Doi(args) => commands::analyze::handle_doi(&args, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Synthesize(args) => commands::synthesize::handle(&args, ctx, flags).await,
        Commands::History { action } => commands::history::handle(&action, ctx, flags),
        Commands::Health => commands::health::handle(ctx, flags).await,
    }
}
