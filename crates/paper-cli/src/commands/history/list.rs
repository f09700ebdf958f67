use chrono::{DateTime, Utc};
use paper_core::entities::HistoryEntry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::display_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct HistoryRow<'a> {
    id: &'a str,
    kind: &'static str,
    title: &'a str,
    classification: &'a str,
    age: String,
}

#[derive(Debug, Serialize)]
struct HistoryListResponse<'a> {
    entries: Vec<HistoryRow<'a>>,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = display_limit(flags.limit, paper_history::HISTORY_CAPACITY);
    let entries = rows(ctx.controller.history().entries(), limit, Utc::now());
    output(&HistoryListResponse { entries }, flags.format)
}

fn rows(entries: &[HistoryEntry], limit: usize, now: DateTime<Utc>) -> Vec<HistoryRow<'_>> {
    entries
        .iter()
        .take(limit)
        .map(|entry| HistoryRow {
            id: &entry.id,
            kind: entry.kind.display_label(),
            title: &entry.title,
            classification: &entry.result.classification_label,
            age: entry.age_label(now),
        })
        .collect()
}
