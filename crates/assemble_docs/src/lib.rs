// crates/assemble_docs/src/lib.rs

use anyhow::{Context, Result};
use regex::NoExpand;
use std::fs;

use extract_markers::{contains_marker_bytes, extract_markers};
use find_documents::Document;
use resolve_block::{marker_regex, BlockSource};
use rewrite_pipeline::rewrite;

/// The rewritten text of a document plus what happened to each of its markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub text: String,
    pub resolved: Vec<String>,
    pub unresolved: Vec<String>,
}

/// What [`process_document`] did with a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No marker in the document; it was not written.
    Untouched,
    /// The document held markers and was written back in place.
    Rewritten { resolved: usize, unresolved: usize },
}

/// Replaces every placeholder for `id` in `content` with `block`.
///
/// The placeholder includes the whitespace that follows it. `block` is
/// inserted verbatim; `$` has no special meaning.
pub fn splice_block(content: &str, id: &str, block: &str) -> String {
    marker_regex(id)
        .replace_all(content, NoExpand(block))
        .into_owned()
}

/// Resolves and splices every marker in `content`, then runs the rewrite
/// pipeline over the whole document.
///
/// Returns `Ok(None)` when the document has no marker at all. Once a marker
/// is present the pipeline runs even if no block could be resolved, so
/// comments and empty headings elsewhere in the document are cleaned up too.
pub fn assemble_document(content: &str, source: &dyn BlockSource) -> Result<Option<Assembled>> {
    let markers = extract_markers(content);
    if markers.is_empty() {
        return Ok(None);
    }

    let mut text = content.to_string();
    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();

    for id in markers {
        // An earlier occurrence of the same identifier already spliced them all.
        if resolved.contains(&id) {
            resolved.push(id);
            continue;
        }
        match source.resolve(&id)? {
            Some(block) if marker_regex(&id).is_match(&text) => {
                text = splice_block(&text, &id, &block);
                resolved.push(id);
            }
            Some(_) => {
                log::debug!("block '{}' found but its marker cannot be spliced", id);
                unresolved.push(id);
            }
            None => {
                log::debug!("leaving marker '{}' unresolved", id);
                unresolved.push(id);
            }
        }
    }

    Ok(Some(Assembled {
        text: rewrite(&text),
        resolved,
        unresolved,
    }))
}

/// Assembles `doc` and overwrites it in place when it held any marker.
///
/// Documents without a marker are skipped before decoding, so only documents
/// that get rewritten need to be valid UTF-8.
pub fn process_document(doc: &Document, source: &dyn BlockSource) -> Result<Outcome> {
    if !contains_marker_bytes(&doc.bytes) {
        return Ok(Outcome::Untouched);
    }
    let assembled = match assemble_document(doc.text()?, source)
        .with_context(|| format!("Error resolving blocks for {}", doc.path.display()))?
    {
        Some(assembled) => assembled,
        None => return Ok(Outcome::Untouched),
    };

    fs::write(&doc.path, &assembled.text)
        .with_context(|| format!("Error writing document {}", doc.path.display()))?;

    log::info!(
        "rewrote {} ({} resolved, {} unresolved)",
        doc.path.display(),
        assembled.resolved.len(),
        assembled.unresolved.len()
    );
    Ok(Outcome::Rewritten {
        resolved: assembled.resolved.len(),
        unresolved: assembled.unresolved.len(),
    })
}
