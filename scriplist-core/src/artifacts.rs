//! Artifact emission.
//!
//! The sink trait keeps filesystem mechanics out of the pipeline and lets
//! tests capture output without touching disk. Formatting is fixed: pretty
//! JSON with two-space indent and a trailing newline, TXT as one symbol per
//! line with a trailing newline. Identical input sets must produce
//! byte-identical files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::feed::provider::FeedError;
use crate::manifest::RunManifest;
use crate::pipeline::SymbolSet;

/// Destination for the generated artifacts.
pub trait ArtifactSink {
    /// Write `tickers.json`, `tickers.txt`, and (for buckets with retained
    /// records) `full_tickers.json` for one set.
    fn write_set(&self, set: &SymbolSet) -> Result<(), FeedError>;

    /// Write the run manifest, after all sets.
    fn write_manifest(&self, manifest: &RunManifest) -> Result<(), FeedError>;
}

/// Filesystem sink rooted at the output directory.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), FeedError> {
    fs::write(path, contents).map_err(|source| FeedError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn create_dir(path: &Path) -> Result<(), FeedError> {
    fs::create_dir_all(path).map_err(|source| FeedError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, FeedError> {
    let mut json =
        serde_json::to_string_pretty(value).map_err(|e| FeedError::Json(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

impl ArtifactSink for FsSink {
    fn write_set(&self, set: &SymbolSet) -> Result<(), FeedError> {
        let dir = self.root.join(&set.dir);
        create_dir(&dir)?;

        write_file(&dir.join("tickers.json"), &to_json_pretty(&set.tickers)?)?;

        let mut txt = set.tickers.join("\n");
        txt.push('\n');
        write_file(&dir.join("tickers.txt"), &txt)?;

        if !set.full.is_empty() {
            write_file(&dir.join("full_tickers.json"), &to_json_pretty(&set.full)?)?;
        }

        Ok(())
    }

    fn write_manifest(&self, manifest: &RunManifest) -> Result<(), FeedError> {
        create_dir(&self.root)?;
        write_file(&self.root.join("manifest.json"), &to_json_pretty(manifest)?)
    }
}
