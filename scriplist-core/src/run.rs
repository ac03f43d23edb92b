//! Run orchestrator: fetch → parse → classify → dedupe → emit.
//!
//! The pipeline runs to completion in memory before the first write, so a
//! fetch or parse failure never leaves partial output behind. A write
//! failure aborts mid-emission; files already written stay as-is and the
//! next scheduled run overwrites them.

use log::{info, warn};

use crate::artifacts::ArtifactSink;
use crate::feed::parse::parse_feed;
use crate::feed::provider::{FeedError, ScripMasterProvider};
use crate::manifest::RunManifest;
use crate::pipeline::build_sets;

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub manifest: RunManifest,
}

/// Execute one complete aggregation run.
pub fn run_aggregation(
    provider: &dyn ScripMasterProvider,
    sink: &dyn ArtifactSink,
) -> Result<RunSummary, FeedError> {
    info!("fetching scrip master from {}", provider.source());
    let csv_text = provider.fetch()?;

    let feed = parse_feed(&csv_text)?;
    info!(
        "parsed {} rows, {} tradable",
        feed.total_rows,
        feed.records.len()
    );

    let aggregate = build_sets(feed);
    for set in &aggregate.sets {
        info!("{}: {} symbols", set.key, set.tickers.len());
    }
    if aggregate.skips.total() > 0 {
        warn!(
            "skipped rows: {} malformed, {} not tradable, {} unclassified, {} empty symbol",
            aggregate.skips.malformed,
            aggregate.skips.not_tradable,
            aggregate.skips.unclassified,
            aggregate.skips.empty_symbol,
        );
    }

    for set in &aggregate.sets {
        sink.write_set(set)?;
    }

    let manifest = RunManifest::new(provider.source(), &csv_text, &aggregate);
    sink.write_manifest(&manifest)?;

    Ok(RunSummary { manifest })
}
