use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{ExtractArgs, FetchArgs, StoreArgs};
use crate::sources::crossref::CROSSREF_API_BASE;
use crate::sources::semantic_scholar::SEMANTIC_SCHOLAR_API_BASE;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Everything one pipeline run needs to know
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub cache_path: PathBuf,
    /// How long a cached count stays fresh
    pub retention_window: Duration,
    /// Pause after each DOI that hit the network, except the last
    pub request_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub crossref_url: String,
    pub semantic_scholar_url: String,
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/publications.yaml"),
            cache_path: PathBuf::from("data/.citations-cache.json"),
            retention_window: Duration::from_secs(7 * SECONDS_PER_DAY),
            request_delay: Duration::from_millis(1000),
            request_timeout: Duration::from_secs(10),
            user_agent: "PersonalWebsite/1.0".to_string(),
            crossref_url: CROSSREF_API_BASE.to_string(),
            semantic_scholar_url: SEMANTIC_SCHOLAR_API_BASE.to_string(),
            dry_run: false,
        }
    }
}

impl PipelineConfig {
    fn with_store(store: &StoreArgs) -> Self {
        Self {
            input_path: PathBuf::from(&store.input),
            cache_path: PathBuf::from(&store.cache),
            retention_window: Duration::from_secs(store.cache_days.saturating_mul(SECONDS_PER_DAY)),
            ..Self::default()
        }
    }
}

impl From<&FetchArgs> for PipelineConfig {
    fn from(args: &FetchArgs) -> Self {
        Self {
            request_delay: Duration::from_millis(args.delay_ms),
            request_timeout: Duration::from_secs(args.timeout),
            user_agent: args.user_agent.clone(),
            crossref_url: args.crossref_url.clone(),
            semantic_scholar_url: args.semantic_scholar_url.clone(),
            dry_run: args.dry_run,
            ..Self::with_store(&args.store)
        }
    }
}

impl From<&ExtractArgs> for PipelineConfig {
    fn from(args: &ExtractArgs) -> Self {
        Self::with_store(&args.store)
    }
}
