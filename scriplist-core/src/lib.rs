//! Scriplist Core — scrip-master aggregation pipeline.
//!
//! Turns the IIFL scrip-master CSV into per-exchange, per-segment ticker
//! lists:
//! - Feed layer: provider trait, IIFL HTTP implementation, CSV parsing
//! - Bucket table: the fixed (exchange, segment) → output-set mapping
//! - Pipeline: classification, symbol cleaning, dedupe, sort, union
//! - Artifacts: JSON/TXT emission plus a per-run manifest

pub mod artifacts;
pub mod buckets;
pub mod feed;
pub mod manifest;
pub mod pipeline;
pub mod run;

pub use run::{run_aggregation, RunSummary};
