//! Classification, cleaning, dedupe, and the combined set.
//!
//! Everything in here is pure: records in, sorted unique symbol sets out.
//! Determinism matters more than speed — the outputs are committed artifacts
//! and a rerun on unchanged input must be byte-identical.

use std::collections::HashSet;

use serde::Serialize;

use crate::buckets::{Exchange, BUCKETS};
use crate::feed::parse::{ParsedFeed, ScripRecord, SkipCounts};

/// One entry of `full_tickers.json`: the display symbol plus the upstream
/// metadata worth keeping.
#[derive(Debug, Clone, Serialize)]
pub struct FullRecord {
    pub symbol: String,
    pub scripcode: String,
    pub name: String,
    pub series: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    pub exchange: Exchange,
}

impl FullRecord {
    fn new(symbol: String, rec: &ScripRecord, exchange: Exchange) -> Self {
        Self {
            symbol,
            scripcode: rec.scripcode.trim().to_string(),
            name: rec.name.trim().to_string(),
            series: rec.series.trim().to_string(),
            full_name: rec.full_name.as_ref().map(|s| s.trim().to_string()),
            isin: rec.isin.as_ref().map(|s| s.trim().to_string()),
            exchange,
        }
    }
}

/// A named, sorted, duplicate-free output set.
///
/// `full` is empty for the derived `all` set, which only carries display
/// strings.
#[derive(Debug, Clone)]
pub struct SymbolSet {
    pub key: String,
    pub dir: String,
    pub tickers: Vec<String>,
    pub full: Vec<FullRecord>,
}

/// The complete output of one run, before emission.
#[derive(Debug)]
pub struct Aggregate {
    pub sets: Vec<SymbolSet>,
    pub total_rows: usize,
    pub skips: SkipCounts,
}

impl Aggregate {
    pub fn set(&self, key: &str) -> Option<&SymbolSet> {
        self.sets.iter().find(|s| s.key == key)
    }
}

/// Normalize a raw ticker: drop whitespace and quote characters, uppercase.
///
/// Returns `None` when nothing is left, which the caller counts as a skip.
pub fn clean_symbol(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '"' && *c != '\'')
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_uppercase())
    }
}

/// Collapse exact-string duplicates (first seen wins) and sort ascending.
///
/// Idempotent: applying it to its own output is a no-op.
pub fn dedupe_sorted(tickers: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut unique: Vec<String> = tickers
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect();
    unique.sort();
    unique
}

/// Classify all records into buckets and derive the combined `all` set.
pub fn build_sets(feed: ParsedFeed) -> Aggregate {
    let mut skips = feed.skips;

    let mut tickers: Vec<Vec<String>> = vec![Vec::new(); BUCKETS.len()];
    let mut full: Vec<Vec<FullRecord>> = vec![Vec::new(); BUCKETS.len()];
    let mut seen: Vec<HashSet<String>> = vec![HashSet::new(); BUCKETS.len()];

    for rec in &feed.records {
        let mut matched = false;
        for (i, bucket) in BUCKETS.iter().enumerate() {
            if !bucket.matches(rec) {
                continue;
            }
            matched = true;
            match clean_symbol(bucket.raw_ticker(rec)) {
                Some(base) => {
                    let display = format!("{base}{}", bucket.exchange.suffix());
                    if seen[i].insert(display.clone()) {
                        full[i].push(FullRecord::new(display.clone(), rec, bucket.exchange));
                    }
                    tickers[i].push(display);
                }
                None => skips.empty_symbol += 1,
            }
        }
        if !matched {
            skips.unclassified += 1;
        }
    }

    let mut sets = Vec::with_capacity(BUCKETS.len() + 1);
    let mut all = Vec::new();

    for (i, bucket) in BUCKETS.iter().enumerate() {
        let sorted = dedupe_sorted(std::mem::take(&mut tickers[i]));
        if bucket.include_in_all {
            all.extend(sorted.iter().cloned());
        }

        let mut full_records = std::mem::take(&mut full[i]);
        full_records.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        sets.push(SymbolSet {
            key: bucket.key.to_string(),
            dir: bucket.dir.to_string(),
            tickers: sorted,
            full: full_records,
        });
    }

    sets.push(SymbolSet {
        key: "all".to_string(),
        dir: "all".to_string(),
        tickers: dedupe_sorted(all),
        full: Vec::new(),
    });

    Aggregate {
        sets,
        total_rows: feed.total_rows,
        skips,
    }
}
