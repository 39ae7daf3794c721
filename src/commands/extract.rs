use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Write};

use crate::cache::{CacheState, CitationCache};
use crate::cli::ExtractArgs;
use crate::common::{now_millis, setup_logging, ExtractStats};
use crate::config::PipelineConfig;
use crate::extract::{extract_dois, unique_dois};

/// Write one tab-separated line per unique DOI: `doi`, cache state, cached count
pub fn list_dois<W: Write>(
    config: &PipelineConfig,
    now: i64,
    out: &mut W,
) -> Result<ExtractStats> {
    let text = fs::read_to_string(&config.input_path).with_context(|| {
        format!("Failed to read publications file: {}", config.input_path.display())
    })?;

    let dois = extract_dois(&text);
    let unique = unique_dois(&dois);
    let mut stats = ExtractStats {
        total_dois: dois.len(),
        unique_dois: unique.len(),
        ..ExtractStats::default()
    };

    if dois.is_empty() {
        info!("No DOIs found");
        return Ok(stats);
    }

    let cache = CitationCache::load(&config.cache_path);

    for doi in &unique {
        let (state, count) = match cache.state(doi, now, config.retention_window) {
            CacheState::Fresh(entry) => {
                stats.fresh += 1;
                ("fresh", entry.count.to_string())
            }
            CacheState::Stale(entry) => {
                stats.stale += 1;
                ("stale", entry.count.to_string())
            }
            CacheState::Missing => {
                stats.missing += 1;
                ("missing", "-".to_string())
            }
        };
        writeln!(out, "{}\t{}\t{}", doi, state, count)?;
    }

    Ok(stats)
}

pub fn run_extract(args: ExtractArgs) -> Result<ExtractStats> {
    setup_logging(&args.store.log_level)?;

    let config = PipelineConfig::from(&args);
    info!("Listing DOIs in: {}", config.input_path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stats = list_dois(&config, now_millis(), &mut out)?;
    out.flush()?;

    info!(
        "{} DOI fields, {} unique: {} fresh, {} stale, {} not cached",
        stats.total_dois, stats.unique_dois, stats.fresh, stats.stale, stats.missing
    );

    Ok(stats)
}
