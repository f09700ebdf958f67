use anyhow::Context;
use paper_core::enums::{SynthesisType, WorkflowKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SynthesizeArgs;
use crate::commands::shared::parse::{parse_enum, search_query};
use crate::commands::shared::view::ResultView;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `pax synthesize`: search, select, then synthesize in one run.
pub async fn handle(
    args: &SynthesizeArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = search_query(
        &args.query,
        args.source.as_deref(),
        args.max_results,
        &ctx.config.general,
    )?;
    let synthesis_type = args
        .synthesis_type
        .as_deref()
        .map(|raw| parse_enum::<SynthesisType>(raw, "synthesis type"))
        .transpose()?
        .unwrap_or(ctx.config.general.default_synthesis_type);

    let session = ctx.new_session();
    ctx.controller.open_session(session);

    let spinner = Progress::spinner("Searching papers...");
    let outcome = ctx.controller.search(query).await;
    spinner.finish_clear();
    outcome?;

    select(args, ctx)?;

    let selected = ctx.controller.session().map_or(0, |s| s.selected().len());
    let spinner = Progress::spinner(&format!("Synthesizing {selected} papers..."));
    let stored = match ctx.controller.synthesize(synthesis_type).await {
        Ok(result) => !result.is_error(),
        Err(error) => {
            spinner.finish_clear();
            return Err(error.into());
        }
    };
    if stored {
        spinner.finish_clear();
    } else {
        spinner.finish_err(&format!("{} failed", "synthesis"));
    }

    let controller = &ctx.controller;
    let history_id = controller.history().latest_id().filter(|_| stored);
    let result = controller
        .current()
        .context("synthesis finished without a result")?;
    output(
        &ResultView::new(WorkflowKind::Synthesis, result, history_id),
        flags.format,
    )
}

fn select(args: &SynthesizeArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    let session = ctx
        .controller
        .session_mut()
        .context("synthesis session was not opened")?;

    if args.all {
        session.select_all();
        return Ok(());
    }

    let mut seen = Vec::<&str>::new();
    for id in args.select.iter().map(|id| id.trim()).filter(|id| !id.is_empty()) {
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        session.toggle(id).with_context(|| {
            let available = session
                .papers()
                .iter()
                .map(|paper| paper.id.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("cannot select '{id}'; results are: {available}")
        })?;
    }
    Ok(())
}
