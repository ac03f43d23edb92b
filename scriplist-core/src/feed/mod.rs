//! Scrip-master feed: fetching and parsing.

pub mod iifl;
pub mod parse;
pub mod provider;

pub use iifl::{IiflProvider, DEFAULT_FEED_URL};
pub use parse::{parse_feed, ParsedFeed, ScripRecord, SkipCounts};
pub use provider::{FeedError, ScripMasterProvider};
