//! `pax upload`, `pax url`, `pax doi`.

use anyhow::Context;
use paper_core::requests::WorkflowRequest;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{DoiArgs, UploadArgs, UrlArgs};
use crate::commands::shared::view::ResultView;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `pax upload`.
pub async fn handle_upload(
    args: &UploadArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let contents = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let filename = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let request = WorkflowRequest::Upload {
        filename,
        contents,
        topics: ctx.topics(args.topics.as_deref()),
    };
    submit(request, ctx, flags).await
}

/// Handle `pax url`.
pub async fn handle_url(
    args: &UrlArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = WorkflowRequest::Url {
        url: args.url.clone(),
        topics: ctx.topics(args.topics.as_deref()),
    };
    submit(request, ctx, flags).await
}

/// Handle `pax doi`.
pub async fn handle_doi(
    args: &DoiArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = WorkflowRequest::Doi {
        doi: args.doi.clone(),
        topics: ctx.topics(args.topics.as_deref()),
    };
    submit(request, ctx, flags).await
}

/// Submit `request`, show a spinner while analyzing, and print the result.
async fn submit(
    request: WorkflowRequest,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = request.kind();
    let previous_id = ctx.controller.history().latest_id().map(ToString::to_string);

    let spinner = Progress::spinner(&format!("Analyzing ({})...", kind.display_label()));
    let stored = match ctx.controller.run(request).await {
        Ok(result) => !result.is_error(),
        Err(error) => {
            spinner.finish_clear();
            return Err(error.into());
        }
    };
    if stored {
        spinner.finish_clear();
    } else {
        spinner.finish_err(&format!("{} failed", kind.display_label()));
    }

    let controller = &ctx.controller;
    let history_id = controller
        .history()
        .latest_id()
        .filter(|id| stored && previous_id.as_deref() != Some(*id));
    let result = controller
        .current()
        .context("workflow finished without a result")?;
    output(&ResultView::new(kind, result, history_id), flags.format)
}
