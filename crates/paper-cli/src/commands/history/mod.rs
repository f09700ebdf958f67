mod clear;
mod list;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::context::AppContext;

/// Handle `pax history`.
pub fn handle(
    action: &HistoryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List => list::run(ctx, flags),
        HistoryCommands::Show { id } => show::run(id, ctx, flags),
        HistoryCommands::Clear { yes } => clear::run(*yes, ctx, flags),
    }
}
