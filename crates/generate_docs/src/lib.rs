// crates/generate_docs/src/lib.rs

use anyhow::{Context, Result};
use std::fmt;

use assemble_docs::{process_document, Outcome};
use find_documents::DocumentScanner;
use resolve_block::{AggregatedSource, BlockSource, ReloadingSource};

pub mod config;

pub use config::DocsConfig;

/// Counters gathered over one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub documents_scanned: usize,
    pub documents_rewritten: usize,
    pub markers_resolved: usize,
    pub markers_unresolved: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) checked, {} rewritten, {} marker(s) resolved, {} unresolved",
            self.documents_scanned,
            self.documents_rewritten,
            self.markers_resolved,
            self.markers_unresolved
        )
    }
}

/// Splices blocks into every document below every configured root.
///
/// Roots are processed in order. The first I/O failure (unreadable document,
/// unreadable aggregated source, unwritable destination) aborts the run.
pub fn generate_docs(config: &DocsConfig) -> Result<RunSummary> {
    let source: Box<dyn BlockSource> = if config.reload_source {
        Box::new(ReloadingSource::new(&config.source))
    } else {
        Box::new(
            AggregatedSource::open(&config.source)
                .context("Failed to load the aggregated comments file")?,
        )
    };

    let mut summary = RunSummary::default();
    for root in &config.roots {
        log::debug!("scanning root {}", root.display());
        let scanner = DocumentScanner::new(root).with_extension(&config.extension);
        for document in scanner.scan() {
            let document = document?;
            println!("checking file: {}", document.path.display());
            summary.documents_scanned += 1;

            match process_document(&document, source.as_ref())? {
                Outcome::Untouched => {}
                Outcome::Rewritten {
                    resolved,
                    unresolved,
                } => {
                    summary.documents_rewritten += 1;
                    summary.markers_resolved += resolved;
                    summary.markers_unresolved += unresolved;
                }
            }
        }
    }

    log::info!("{}", summary);
    Ok(summary)
}
