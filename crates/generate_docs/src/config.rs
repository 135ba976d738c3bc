// crates/generate_docs/src/config.rs

use std::env;
use std::path::PathBuf;

use docublock_marker::{DEFAULT_DOC_ROOT, DEFAULT_SOURCE_FILE, DOC_EXTENSION};

/// Environment variable that overrides the aggregated source path when none
/// is given on the command line.
pub const SOURCE_ENV_VAR: &str = "DOCUBLOCK_SOURCE";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsConfig {
    /// Documentation roots, processed in order.
    pub roots: Vec<PathBuf>,
    /// Aggregated comments file.
    pub source: PathBuf,
    /// Document extension, without the dot.
    pub extension: String,
    /// Re-read the aggregated source for every marker instead of once per run.
    pub reload_source: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(DEFAULT_DOC_ROOT)],
            source: PathBuf::from(DEFAULT_SOURCE_FILE),
            extension: DOC_EXTENSION.to_string(),
            reload_source: false,
        }
    }
}

/// Aggregated source path: `DOCUBLOCK_SOURCE` if set, otherwise the default.
pub fn source_from_env() -> PathBuf {
    env::var(SOURCE_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_FILE))
}
