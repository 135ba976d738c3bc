// crates/docublock_marker/src/lib.rs

//! Tokens and default locations shared throughout the docublock tool‑chain.

/// Opens a placeholder in a document and a block in the aggregated source.
pub const START_TOKEN: &str = "@startDocuBlock";

/// Closes a block in the aggregated source.
pub const END_TOKEN: &str = "@endDocuBlock";

/// Extension (without the leading dot) of the documents that get scanned.
pub const DOC_EXTENSION: &str = "md";

/// Name of the aggregated comments file produced by the extraction step.
pub const DEFAULT_SOURCE_FILE: &str = "allComments.txt";

/// Documentation root used when no root is configured.
pub const DEFAULT_DOC_ROOT: &str = "Documentation/Books/Users";
