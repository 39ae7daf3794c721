use anyhow::{Context, Result};
use log::{error, info};
use std::fs;
use std::time::Instant;

use crate::cache::CitationCache;
use crate::cli::FetchArgs;
use crate::common::{
    create_doi_progress_bar, format_elapsed, now_millis, setup_logging, write_atomic, FetchStats,
};
use crate::config::PipelineConfig;
use crate::extract::extract_dois;
use crate::patch::{patch_citations, CitationMap};
use crate::resolver::{CitationResolver, Resolution};
use crate::sources::{create_api_client, CitationSource, CrossrefSource, SemanticScholarSource};

/// Crossref first, Semantic Scholar as fallback
pub fn build_sources(config: &PipelineConfig) -> Result<Vec<Box<dyn CitationSource>>> {
    let client = create_api_client(&config.user_agent, config.request_timeout)
        .context("Failed to build HTTP client")?;

    let primary: Box<dyn CitationSource> =
        Box::new(CrossrefSource::new(client.clone(), config.crossref_url.clone()));
    let fallback: Box<dyn CitationSource> =
        Box::new(SemanticScholarSource::new(client, config.semantic_scholar_url.clone()));

    Ok(vec![primary, fallback])
}

/// Extract DOIs, resolve each one in turn, save the cache, then patch the publications file.
///
/// Only reading or writing the publications file is fatal; source and cache failures are
/// logged and the run continues.
pub async fn fetch_citations(
    config: &PipelineConfig,
    sources: Vec<Box<dyn CitationSource>>,
) -> Result<FetchStats> {
    let mut stats = FetchStats::default();

    let text = fs::read_to_string(&config.input_path).with_context(|| {
        format!("Failed to read publications file: {}", config.input_path.display())
    })?;

    let dois = extract_dois(&text);
    stats.total_dois = dois.len();
    info!("Found {} publications with DOIs", dois.len());

    if dois.is_empty() {
        info!("No DOIs found, exiting");
        return Ok(stats);
    }

    let cache = CitationCache::load(&config.cache_path);
    let mut resolver = CitationResolver::new(sources, cache, config.retention_window, now_millis());
    let mut citations = CitationMap::new();

    let progress = create_doi_progress_bar(dois.len() as u64);

    for (i, doi) in dois.iter().enumerate() {
        info!("[{}/{}] Processing {}", i + 1, dois.len(), doi);

        let resolution = resolver.resolve(doi).await;
        match &resolution {
            Resolution::Cached(_) => stats.cache_hits += 1,
            Resolution::Fetched { .. } => stats.fetched += 1,
            Resolution::Stale(_) => stats.stale += 1,
            Resolution::Unresolved => stats.unresolved += 1,
        }
        if let Some(count) = resolution.count() {
            citations.insert(doi.clone(), count);
        }

        progress.inc(1);

        // Be polite to the APIs
        if resolution.used_network() && i + 1 < dois.len() && !config.request_delay.is_zero() {
            tokio::time::sleep(config.request_delay).await;
        }
    }

    progress.finish_with_message("Resolution complete");

    // The cache is written before the publications file so a failed write below
    // does not lose this round of fetches.
    let cache = resolver.into_cache();
    match cache.save(&config.cache_path) {
        Ok(()) => info!("Cache saved: {} entries", cache.len()),
        Err(e) => error!("Failed to save cache: {:#}", e),
    }

    info!("Updating publications file...");
    let outcome = patch_citations(&text, &citations).context("Failed to build DOI pattern")?;
    stats.publications_updated = outcome.updated;

    if config.dry_run {
        info!(
            "Dry run: would update {} publications with citation counts",
            outcome.updated
        );
    } else if outcome.text == text {
        info!("Publications file already up to date");
    } else {
        write_atomic(&config.input_path, &outcome.text).with_context(|| {
            format!("Failed to write publications file: {}", config.input_path.display())
        })?;
        info!("Updated {} publications with citation counts", outcome.updated);
    }

    Ok(stats)
}

pub async fn run_fetch_async(args: FetchArgs) -> Result<FetchStats> {
    let start_time = Instant::now();

    setup_logging(&args.store.log_level)?;

    let config = PipelineConfig::from(&args);

    info!("Fetching citation counts for publications");
    info!("Input: {}", config.input_path.display());
    info!("Cache: {}", config.cache_path.display());
    info!("Cache retention: {} days", args.store.cache_days);
    info!("Request delay: {}ms", args.delay_ms);

    let sources = build_sources(&config)?;
    let stats = fetch_citations(&config, sources).await?;

    info!("==================== FINAL SUMMARY ====================");
    info!("Total execution time: {}", format_elapsed(start_time.elapsed()));
    info!("DOIs found: {}", stats.total_dois);
    info!("Resolved: {}/{}", stats.resolved(), stats.total_dois);
    info!("Cache hits: {}", stats.cache_hits);
    info!("Fetched: {}", stats.fetched);
    info!("Stale fallbacks: {}", stats.stale);
    info!("Unresolved: {}", stats.unresolved);
    info!("Publications updated: {}", stats.publications_updated);
    info!("========================================================");

    Ok(stats)
}

pub fn run_fetch(args: FetchArgs) -> Result<FetchStats> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_fetch_async(args))
}
