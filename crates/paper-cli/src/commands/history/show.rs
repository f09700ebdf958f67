use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::shared::view::ResultView;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.controller.load_from_history(id)?;

    let controller = &ctx.controller;
    let kind = controller
        .history()
        .get(id)
        .map(|entry| entry.kind)
        .with_context(|| format!("history entry {id} is no longer stored"))?;
    let result = controller
        .current()
        .context("history entry loaded without a result")?;
    output(&ResultView::new(kind, result, Some(id)), flags.format)
}
