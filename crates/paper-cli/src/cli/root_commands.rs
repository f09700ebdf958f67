use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::HistoryCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze a local paper file.
    Upload(UploadArgs),
    /// Analyze the paper at a URL.
    Url(UrlArgs),
    /// Analyze the paper identified by a DOI.
    Doi(DoiArgs),
    /// Search arXiv and Semantic Scholar.
    Search(SearchArgs),
    /// Search, select papers, and synthesize them.
    Synthesize(SynthesizeArgs),
    /// Stored analyses.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Check that the analysis backend is reachable.
    Health,
}

#[derive(Clone, Debug, Args)]
pub struct UploadArgs {
    /// Path to the paper (PDF, DOCX, or text).
    pub file: PathBuf,
    /// Comma-separated topics to emphasize.
    #[arg(long)]
    pub topics: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UrlArgs {
    /// Paper URL.
    pub url: String,
    /// Comma-separated topics to emphasize.
    #[arg(long)]
    pub topics: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DoiArgs {
    /// DOI, e.g. 10.1038/nature14539.
    pub doi: String,
    /// Comma-separated topics to emphasize.
    #[arg(long)]
    pub topics: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Search query.
    pub query: String,
    /// Index to search: both, arxiv, semantic-scholar.
    #[arg(long)]
    pub source: Option<String>,
    /// Results requested from the backend: 5, 10, 15, or 20.
    #[arg(long)]
    pub max_results: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct SynthesizeArgs {
    /// Search query whose results are synthesized.
    pub query: String,
    /// Paper ids to select, in order (comma-separated or repeated).
    #[arg(long, value_delimiter = ',', required_unless_present = "all")]
    pub select: Vec<String>,
    /// Select every search result.
    #[arg(long, conflicts_with = "select")]
    pub all: bool,
    /// Index to search: both, arxiv, semantic-scholar.
    #[arg(long)]
    pub source: Option<String>,
    /// Results requested from the backend: 5, 10, 15, or 20.
    #[arg(long)]
    pub max_results: Option<u32>,
    /// Synthesis flavor: comprehensive, comparative, thematic.
    #[arg(long = "type")]
    pub synthesis_type: Option<String>,
}
