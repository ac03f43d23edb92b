//! Per-run manifest.
//!
//! Diagnostic artifact written alongside the ticker lists: when the feed was
//! pulled, from where, a hash of the exact bytes, and what came out of the
//! pipeline. Consumers of the ticker lists can ignore it; it exists so a
//! surprising diff in the committed outputs can be traced to a feed change.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::feed::parse::SkipCounts;
use crate::pipeline::Aggregate;

#[derive(Debug, Serialize)]
pub struct RunManifest {
    pub generated_at: DateTime<Utc>,
    pub feed_url: String,
    /// blake3 of the fetched CSV text.
    pub feed_hash: String,
    pub total_rows: usize,
    pub set_counts: BTreeMap<String, usize>,
    pub skips: SkipCounts,
}

impl RunManifest {
    pub fn new(feed_url: &str, csv_text: &str, aggregate: &Aggregate) -> Self {
        let set_counts = aggregate
            .sets
            .iter()
            .map(|s| (s.key.clone(), s.tickers.len()))
            .collect();

        Self {
            generated_at: Utc::now(),
            feed_url: feed_url.to_string(),
            feed_hash: blake3::hash(csv_text.as_bytes()).to_hex().to_string(),
            total_rows: aggregate.total_rows,
            set_counts,
            skips: aggregate.skips,
        }
    }
}
