/// Statistics from one fetch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// `doi:` fields found, duplicates included
    pub total_dois: usize,
    /// Served from a fresh cache entry
    pub cache_hits: usize,
    /// Resolved by a remote source
    pub fetched: usize,
    /// All sources failed, stale cache entry used
    pub stale: usize,
    /// All sources failed, nothing cached
    pub unresolved: usize,
    /// DOIs that received a citations field in the record store
    pub publications_updated: usize,
}

impl FetchStats {
    /// DOIs that ended the run with a known count
    pub fn resolved(&self) -> usize {
        self.cache_hits + self.fetched + self.stale
    }
}

/// Cache coverage reported by the extract command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// `doi:` fields found, duplicates included
    pub total_dois: usize,
    pub unique_dois: usize,
    pub fresh: usize,
    pub stale: usize,
    pub missing: usize,
}
