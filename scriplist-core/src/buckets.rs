//! The (exchange, segment) → bucket mapping table.
//!
//! This is configuration data, not inferred logic: each bucket names the
//! upstream filter, the column that supplies the display ticker, and whether
//! its output participates in the combined `all` set. Changing what lands in
//! an output file should only ever mean editing this table.

use crate::feed::parse::ScripRecord;
use serde::Serialize;

/// Listing venue. The display suffix derives solely from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    Nse,
    Bse,
}

impl Exchange {
    /// Map the feed's single-letter exchange code. Unknown codes drop the row.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "N" => Some(Self::Nse),
            "B" => Some(Self::Bse),
            _ => None,
        }
    }

    /// Market-identifying suffix appended to the base ticker.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Nse => ".NS",
            Self::Bse => ".BO",
        }
    }
}

/// NSE series codes treated as equity.
const NSE_EQUITY_SERIES: [&str; 5] = ["EQ", "BE", "BZ", "SM", "ST"];

/// BSE scripcode prefixes for the equity group.
const BSE_EQUITY_PREFIXES: [&str; 2] = ["5", "2"];

/// Which upstream column supplies the display ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerField {
    Name,
    Scripcode,
}

/// One output partition.
pub struct Bucket {
    pub key: &'static str,
    pub dir: &'static str,
    pub exchange: Exchange,
    pub ticker_field: TickerField,
    pub include_in_all: bool,
    matcher: fn(&ScripRecord) -> bool,
}

impl Bucket {
    /// Whether a tradable record belongs in this bucket.
    pub fn matches(&self, rec: &ScripRecord) -> bool {
        rec.exchange() == Some(self.exchange) && (self.matcher)(rec)
    }

    /// The raw (uncleaned) ticker for a matching record.
    pub fn raw_ticker<'a>(&self, rec: &'a ScripRecord) -> &'a str {
        match self.ticker_field {
            TickerField::Name => &rec.name,
            TickerField::Scripcode => &rec.scripcode,
        }
    }
}

fn cash_segment(rec: &ScripRecord) -> bool {
    rec.exch_type.trim() == "C"
}

fn nse_equity(rec: &ScripRecord) -> bool {
    cash_segment(rec) && NSE_EQUITY_SERIES.contains(&rec.series.trim())
}

fn nse_etf(rec: &ScripRecord) -> bool {
    cash_segment(rec) && rec.name.to_uppercase().contains("ETF")
}

fn bse_equity(rec: &ScripRecord) -> bool {
    cash_segment(rec)
        && BSE_EQUITY_PREFIXES
            .iter()
            .any(|p| rec.scripcode.trim().starts_with(p))
}

/// The fixed bucket table. Order here fixes the order sets are emitted in.
///
/// ETFs are deliberately excluded from `all` — the NSE equity series already
/// cover the liquid names, and the ETF filter is a substring match that
/// would otherwise leak thematic funds into the combined list.
pub const BUCKETS: [Bucket; 3] = [
    Bucket {
        key: "nse_equity",
        dir: "nse/equity",
        exchange: Exchange::Nse,
        ticker_field: TickerField::Name,
        include_in_all: true,
        matcher: nse_equity,
    },
    Bucket {
        key: "nse_etf",
        dir: "nse/etf",
        exchange: Exchange::Nse,
        ticker_field: TickerField::Name,
        include_in_all: false,
        matcher: nse_etf,
    },
    Bucket {
        key: "bse_equity",
        dir: "bse/equity",
        exchange: Exchange::Bse,
        ticker_field: TickerField::Scripcode,
        include_in_all: true,
        matcher: bse_equity,
    },
];
