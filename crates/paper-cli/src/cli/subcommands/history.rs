use clap::Subcommand;

/// Past analyses stored on this machine.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List stored analyses, newest first (bounded by `--limit`).
    List,
    /// Show a stored analysis without contacting the backend.
    Show {
        /// History entry id.
        id: String,
    },
    /// Delete every stored analysis.
    Clear {
        /// Confirm deletion.
        #[arg(long)]
        yes: bool,
    },
}
