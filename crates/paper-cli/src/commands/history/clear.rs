use anyhow::{Context, bail};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ClearResponse {
    cleared: usize,
}

pub fn run(confirmed: bool, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let count = ctx.controller.history().len();
    if !confirmed {
        bail!("refusing to clear {count} history entries without --yes");
    }
    ctx.controller
        .history_mut()
        .clear()
        .context("failed to delete stored history")?;
    output(&ClearResponse { cleared: count }, flags.format)
}
