use clap::{Args, Parser, Subcommand};

use crate::sources::crossref::CROSSREF_API_BASE;
use crate::sources::semantic_scholar::SEMANTIC_SCHOLAR_API_BASE;

#[derive(Parser)]
#[command(name = "fetch-citations")]
#[command(about = "Enrich a publications data file with citation counts from Crossref and Semantic Scholar")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve citation counts for every DOI and write them into the publications file
    Fetch(FetchArgs),

    /// List the DOIs in the publications file with their cache state (no network access)
    Extract(ExtractArgs),
}

/// Options shared by every subcommand
#[derive(Args, Clone, Debug)]
pub struct StoreArgs {
    /// Publications data file containing `doi:` fields
    #[arg(short, long, default_value = "data/publications.yaml")]
    pub input: String,

    /// JSON cache of previously fetched citation counts
    #[arg(short, long, default_value = "data/.citations-cache.json")]
    pub cache: String,

    /// Days a cached count stays fresh before it is fetched again
    #[arg(long, default_value = "7")]
    pub cache_days: u64,

    /// Logging level (DEBUG, INFO, WARN, ERROR)
    #[arg(short, long, default_value = "INFO")]
    pub log_level: String,
}

#[derive(Parser, Clone, Debug)]
pub struct FetchArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Pause between DOIs that hit the network, in milliseconds
    #[arg(long, default_value = "1000")]
    pub delay_ms: u64,

    /// Timeout in seconds per request
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,

    /// User-Agent header sent to the citation APIs
    #[arg(long, default_value = "PersonalWebsite/1.0")]
    pub user_agent: String,

    /// Base URL of the Crossref API (primary source)
    #[arg(long, default_value = CROSSREF_API_BASE)]
    pub crossref_url: String,

    /// Base URL of the Semantic Scholar API (fallback source)
    #[arg(long, default_value = SEMANTIC_SCHOLAR_API_BASE)]
    pub semantic_scholar_url: String,

    /// Resolve and update the cache, but leave the publications file untouched
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}

#[derive(Parser, Clone, Debug)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}
