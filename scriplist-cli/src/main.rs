//! Scriplist CLI — one-shot scrip-master aggregation run.
//!
//! Fetches the IIFL scrip master, builds the per-exchange ticker sets, and
//! writes the JSON/TXT artifacts under the output directory. Meant to be
//! invoked once a day by an external scheduler: exit 0 on success, non-zero
//! on any fetch/parse/write failure.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scriplist_core::artifacts::FsSink;
use scriplist_core::feed::{IiflProvider, DEFAULT_FEED_URL};
use scriplist_core::run_aggregation;

#[derive(Parser)]
#[command(
    name = "scriplist",
    about = "Scriplist — daily NSE/BSE ticker list builder"
)]
struct Cli {
    /// Scrip-master CSV URL.
    #[arg(long, env = "SCRIPLIST_FEED_URL", default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Root directory for the generated artifacts.
    #[arg(long, env = "SCRIPLIST_OUTPUT_DIR", default_value = "data")]
    output_dir: PathBuf,

    /// HTTP timeout for the feed download, in seconds.
    #[arg(long, env = "SCRIPLIST_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    let provider = IiflProvider::new(cli.feed_url.as_str(), Duration::from_secs(cli.timeout_secs));
    let sink = FsSink::new(&cli.output_dir);

    let summary =
        run_aggregation(&provider, &sink).context("scrip master aggregation failed")?;

    info!(
        "done: {} sets under {} (feed hash {})",
        summary.manifest.set_counts.len(),
        cli.output_dir.display(),
        summary.manifest.feed_hash
    );

    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
