use log::{info, warn};
use std::time::Duration;

use crate::cache::{CacheState, CitationCache};
use crate::sources::CitationSource;

/// How a DOI's citation count was (or was not) determined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Fresh cache entry, no network call made
    Cached(u64),
    /// Fetched from the named source and written to the cache
    Fetched { count: u64, source: String },
    /// Every source failed; the previous cached count is reused, timestamp untouched
    Stale(u64),
    /// Every source failed and nothing was cached
    Unresolved,
}

impl Resolution {
    pub fn count(&self) -> Option<u64> {
        match self {
            Resolution::Cached(count) | Resolution::Stale(count) => Some(*count),
            Resolution::Fetched { count, .. } => Some(*count),
            Resolution::Unresolved => None,
        }
    }

    /// Whether resolving this DOI went to the network
    pub fn used_network(&self) -> bool {
        !matches!(self, Resolution::Cached(_))
    }
}

/// Resolves citation counts cache-first, then through an ordered list of sources
pub struct CitationResolver {
    sources: Vec<Box<dyn CitationSource>>,
    cache: CitationCache,
    retention: Duration,
    now: i64,
}

impl CitationResolver {
    /// `now` is the run's reference time in epoch milliseconds; every entry written
    /// during the run carries it.
    pub fn new(
        sources: Vec<Box<dyn CitationSource>>,
        cache: CitationCache,
        retention: Duration,
        now: i64,
    ) -> Self {
        Self {
            sources,
            cache,
            retention,
            now,
        }
    }

    pub fn cache(&self) -> &CitationCache {
        &self.cache
    }

    pub fn into_cache(self) -> CitationCache {
        self.cache
    }

    pub async fn resolve(&mut self, doi: &str) -> Resolution {
        let fallback = match self.cache.state(doi, self.now, self.retention) {
            CacheState::Fresh(entry) => {
                info!("  Using cached value: {} citations", entry.count);
                return Resolution::Cached(entry.count);
            }
            CacheState::Stale(entry) => Some(entry),
            CacheState::Missing => None,
        };

        if let Some((count, source)) = self.fetch(doi).await {
            info!("  Found {} citations via {}", count, source);
            self.cache.record(doi, count, self.now);
            return Resolution::Fetched { count, source };
        }

        match fallback {
            Some(entry) => {
                warn!("  Using stale cache: {} citations", entry.count);
                Resolution::Stale(entry.count)
            }
            None => {
                warn!("  Could not fetch citations for {}", doi);
                Resolution::Unresolved
            }
        }
    }

    /// Try each source in order; the first success wins
    async fn fetch(&self, doi: &str) -> Option<(u64, String)> {
        for source in &self.sources {
            info!("  Querying {} for {}", source.name(), doi);
            match source.citation_count(doi).await {
                Ok(count) => return Some((count, source.name().to_string())),
                Err(e) => warn!("  {} failed for {}: {}", source.name(), doi, e),
            }
        }
        None
    }
}
