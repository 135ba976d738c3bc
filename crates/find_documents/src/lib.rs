// crates/find_documents/src/lib.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use docublock_marker::DOC_EXTENSION;

/// A document picked up by the scanner, together with its raw bytes.
///
/// Documents are not required to be UTF-8; [`Document::text`] decodes on
/// demand for the ones that actually get rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.bytes)
            .with_context(|| format!("Error decoding document {} as UTF-8", self.path.display()))
    }
}

/// Walks a documentation root and yields every document with the configured
/// extension. Nothing is cached: each call to [`DocumentScanner::scan`] starts
/// over from the root.
#[derive(Debug, Clone)]
pub struct DocumentScanner {
    root: PathBuf,
    extension: String,
}

impl DocumentScanner {
    /// Creates a scanner for `root` that looks for `.md` documents.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            extension: DOC_EXTENSION.to_string(),
        }
    }

    /// Replaces the document extension (given without the leading dot).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily yields every matching file below the root, in file-name order.
    /// Symlinks are followed, so a linked document is picked up like a
    /// regular one.
    ///
    /// A walk error (including a root that does not exist) or an unreadable
    /// document is yielded as an `Err`; callers are expected to stop there.
    pub fn scan(&self) -> impl Iterator<Item = Result<Document>> + '_ {
        let suffix = format!(".{}", self.extension);
        WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| {
                let entry = match entry
                    .with_context(|| format!("Failed to scan {}", self.root.display()))
                {
                    Ok(entry) => entry,
                    Err(err) => return Some(Err(err)),
                };
                if !entry.file_type().is_file() {
                    return None;
                }
                if !entry.file_name().to_string_lossy().ends_with(&suffix) {
                    return None;
                }
                Some(read_document(entry.into_path()))
            })
    }
}

/// Private helper: reads one document from disk.
fn read_document(path: PathBuf) -> Result<Document> {
    log::debug!("reading document {}", path.display());
    let bytes =
        fs::read(&path).with_context(|| format!("Error reading document {}", path.display()))?;
    Ok(Document { path, bytes })
}
