use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct HealthResponse<'a> {
    backend: &'a str,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_directory: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_files: Option<u64>,
}

/// Handle `pax health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let backend = ctx.client.base_url();
    let health = ctx
        .client
        .health()
        .await
        .with_context(|| format!("backend at {backend} is unreachable"))?;
    if !health.is_healthy() {
        tracing::warn!(status = %health.status, "backend reports a degraded state");
    }
    output(
        &HealthResponse {
            backend,
            status: health.status,
            data_directory: health.data_directory,
            audio_files: health.audio_files,
        },
        flags.format,
    )
}
