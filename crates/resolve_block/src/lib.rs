// crates/resolve_block/src/lib.rs

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use docublock_marker::{END_TOKEN, START_TOKEN};
use unescape_line_breaks::unescape_line_breaks;

/// Trait that abstracts where blocks come from.
pub trait BlockSource {
    /// Looks up the block named `id`.
    ///
    /// `Ok(None)` means the block is missing or malformed, which is the normal
    /// "not found" case. `Err` is reserved for I/O failures.
    fn resolve(&self, id: &str) -> Result<Option<String>>;
}

/// Builds the pattern matching a placeholder for `id`: the start token,
/// whitespace, the identifier, then whitespace or the end of the text.
pub fn marker_regex(id: &str) -> Regex {
    Regex::new(&format!(
        r"{}\s+{}(?:\s+|$)",
        regex::escape(START_TOKEN),
        regex::escape(id)
    ))
    .expect("escaped marker pattern is always valid")
}

/// Finds the first block named `id` in `source_text` and returns its body with
/// line-break markup normalized.
///
/// The body runs up to the first end token after the start token; blocks do
/// not nest. A block without an end token is treated as absent.
pub fn find_block(source_text: &str, id: &str) -> Option<String> {
    let block_re = Regex::new(&format!(
        r"(?s){}\s+{}(?:\s+|$)(.+?){}",
        regex::escape(START_TOKEN),
        regex::escape(id),
        regex::escape(END_TOKEN)
    ))
    .expect("escaped block pattern is always valid");

    block_re
        .captures(source_text)
        .map(|caps| unescape_line_breaks(&caps[1]))
}

/// The aggregated comments file, read once and kept in memory for the run.
#[derive(Debug, Clone)]
pub struct AggregatedSource {
    text: String,
}

impl AggregatedSource {
    /// Reads the aggregated comments file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Error reading aggregated source {}", path.display()))?;
        Ok(Self { text })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl BlockSource for AggregatedSource {
    fn resolve(&self, id: &str) -> Result<Option<String>> {
        let block = find_block(&self.text, id);
        if block.is_none() {
            log::debug!("no block named '{}' in aggregated source", id);
        }
        Ok(block)
    }
}

/// Re-reads the aggregated comments file on every lookup.
#[derive(Debug, Clone)]
pub struct ReloadingSource {
    path: PathBuf,
}

impl ReloadingSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlockSource for ReloadingSource {
    fn resolve(&self, id: &str) -> Result<Option<String>> {
        AggregatedSource::open(&self.path)?.resolve(id)
    }
}
