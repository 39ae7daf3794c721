use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

use super::CitationCache;
use crate::common::write_atomic;

impl CitationCache {
    /// Load the cache file. A missing, unreadable or corrupt file yields an empty cache.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("No citation cache at {}, starting empty", path.display());
            return Self::new();
        }

        let loaded = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cache from {}", path.display()))
            .and_then(|json| {
                serde_json::from_str::<Self>(&json).context("Failed to deserialize cache")
            });

        match loaded {
            Ok(cache) => {
                info!("Loaded {} cached citation counts", cache.len());
                cache
            }
            Err(e) => {
                warn!("Could not load cache: {:#}", e);
                Self::new()
            }
        }
    }

    /// Write the whole cache as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize cache")?;
        write_atomic(path, &json)
            .with_context(|| format!("Failed to write cache to {}", path.display()))?;
        Ok(())
    }
}
