use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::limit::display_limit;
use crate::commands::shared::parse::search_query;
use crate::commands::shared::view::PaperRow;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct PaperListResponse<'a> {
    papers: Vec<PaperRow<'a>>,
}

/// Handle `pax search`.
pub async fn handle(
    args: &SearchArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = search_query(
        &args.query,
        args.source.as_deref(),
        args.max_results,
        &ctx.config.general,
    )?;

    let spinner = Progress::spinner("Searching papers...");
    let outcome = ctx.controller.search(query).await;
    spinner.finish_clear();
    let papers = outcome?;

    let limit = display_limit(flags.limit, papers.len());
    let papers = papers.iter().take(limit).map(PaperRow::from).collect();
    output(&PaperListResponse { papers }, flags.format)
}
