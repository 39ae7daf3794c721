mod persistence;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// One cached citation count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub count: u64,
    /// When the count was fetched, epoch milliseconds
    pub timestamp: i64,
}

impl CacheEntry {
    pub fn new(count: u64, timestamp: i64) -> Self {
        Self { count, timestamp }
    }

    /// Fresh while less than `retention` has passed since it was fetched
    pub fn is_fresh(&self, now: i64, retention: Duration) -> bool {
        let age = now.saturating_sub(self.timestamp);
        i128::from(age) < retention.as_millis() as i128
    }
}

/// Where a DOI stands in the cache at a given moment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Fresh(CacheEntry),
    Stale(CacheEntry),
    Missing,
}

/// Citation counts keyed by DOI, persisted as a single JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitationCache {
    entries: BTreeMap<String, CacheEntry>,
}

impl CitationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, doi: &str) -> Option<&CacheEntry> {
        self.entries.get(doi)
    }

    pub fn state(&self, doi: &str, now: i64, retention: Duration) -> CacheState {
        match self.entries.get(doi) {
            Some(entry) if entry.is_fresh(now, retention) => CacheState::Fresh(*entry),
            Some(entry) => CacheState::Stale(*entry),
            None => CacheState::Missing,
        }
    }

    /// Store a freshly fetched count, replacing any previous entry
    pub fn record(&mut self, doi: &str, count: u64, now: i64) {
        self.entries.insert(doi.to_string(), CacheEntry::new(count, now));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
