//! CSV parsing for the scrip master.
//!
//! Header validation is strict: if a required column is missing the whole
//! run fails, because a renamed column means the upstream schema changed and
//! every downstream filter would silently match nothing. Row-level problems
//! (short rows, suspended instruments) are skipped and counted instead.

use super::provider::FeedError;
use serde::{Deserialize, Serialize};

use crate::buckets::Exchange;

/// Columns the pipeline cannot operate without.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Exch", "ExchType", "Scripcode", "Name", "AllowedToTrade"];

/// One row of the upstream feed, as delivered.
///
/// Field names mirror the live CSV headers. `FullName` and `ISIN` are
/// passthrough metadata for `full_tickers.json` and may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ScripRecord {
    #[serde(rename = "Exch")]
    pub exch: String,
    #[serde(rename = "ExchType")]
    pub exch_type: String,
    #[serde(rename = "Scripcode")]
    pub scripcode: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Series", default)]
    pub series: String,
    #[serde(rename = "FullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "ISIN", default)]
    pub isin: Option<String>,
    #[serde(rename = "AllowedToTrade")]
    pub allowed_to_trade: String,
}

impl ScripRecord {
    /// Suspended and blocked instruments carry anything but `Y` here.
    pub fn is_tradable(&self) -> bool {
        self.allowed_to_trade.trim() == "Y"
    }

    /// Exchange of this row; `None` for codes the pipeline does not know.
    pub fn exchange(&self) -> Option<Exchange> {
        Exchange::from_code(self.exch.trim())
    }
}

/// Per-run skip diagnostics. Skips are never fatal.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct SkipCounts {
    /// Rows that failed row-level deserialization.
    pub malformed: usize,
    /// Rows flagged not allowed to trade.
    pub not_tradable: usize,
    /// Tradable rows matching no bucket.
    pub unclassified: usize,
    /// Rows whose ticker cleaned down to nothing.
    pub empty_symbol: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.malformed + self.not_tradable + self.unclassified + self.empty_symbol
    }
}

/// Parsed feed: tradable records plus diagnostics.
#[derive(Debug)]
pub struct ParsedFeed {
    pub records: Vec<ScripRecord>,
    pub total_rows: usize,
    pub skips: SkipCounts,
}

/// Parse the raw CSV text into records.
///
/// Fatal only when the header row is unusable; individual bad rows are
/// counted in [`SkipCounts::malformed`].
pub fn parse_feed(csv_text: &str) -> Result<ParsedFeed, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| FeedError::Csv(e.to_string()))?
        .clone();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(FeedError::MissingColumn {
                column: required.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    let mut skips = SkipCounts::default();
    let mut total_rows = 0;

    for row in reader.deserialize::<ScripRecord>() {
        total_rows += 1;
        match row {
            Ok(rec) if rec.is_tradable() => records.push(rec),
            Ok(_) => skips.not_tradable += 1,
            Err(_) => skips.malformed += 1,
        }
    }

    Ok(ParsedFeed {
        records,
        total_rows,
        skips,
    })
}
