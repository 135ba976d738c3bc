// crates/extract_markers/src/lib.rs

use docublock_marker::START_TOKEN;
use once_cell::sync::Lazy;
use regex::Regex;

// `@startDocuBlock` followed by optional whitespace and a single word identifier.
static MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&marker_pattern()).unwrap());

// Same pattern over raw bytes, for documents that have not been decoded yet.
static MARKER_BYTES_RE: Lazy<regex::bytes::Regex> =
    Lazy::new(|| regex::bytes::Regex::new(&marker_pattern()).unwrap());

fn marker_pattern() -> String {
    format!(r"{}\s*(\w+)", regex::escape(START_TOKEN))
}

/// Returns the identifiers of every placeholder in `content`, in the order they
/// appear. Duplicates are kept.
pub fn extract_markers(content: &str) -> Vec<String> {
    MARKER_RE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Checks whether `content` holds at least one placeholder.
pub fn contains_marker(content: &str) -> bool {
    MARKER_RE.is_match(content)
}

/// Checks raw document bytes for a placeholder without requiring them to be
/// valid UTF-8.
pub fn contains_marker_bytes(bytes: &[u8]) -> bool {
    MARKER_BYTES_RE.is_match(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers() {
        let content = "# Title\n\nPlain text mentioning startDocuBlock without the at sign.\n";
        assert!(extract_markers(content).is_empty());
        assert!(!contains_marker(content));
    }

    #[test]
    fn test_markers_in_document_order_with_duplicates() {
        let content = "\
intro
@startDocuBlock JSF_get_api_collection
middle
@startDocuBlock   JSF_post_api_collection
@startDocuBlock JSF_get_api_collection
";
        assert_eq!(
            extract_markers(content),
            vec![
                "JSF_get_api_collection",
                "JSF_post_api_collection",
                "JSF_get_api_collection"
            ]
        );
    }

    #[test]
    fn test_identifier_stops_at_non_word_character() {
        assert_eq!(extract_markers("@startDocuBlock foo-bar"), vec!["foo"]);
        assert_eq!(extract_markers("see (@startDocuBlock foo)."), vec!["foo"]);
    }

    #[test]
    fn test_marker_at_end_of_text() {
        assert_eq!(extract_markers("@startDocuBlock foo"), vec!["foo"]);
    }

    #[test]
    fn test_token_glued_to_identifier_is_a_marker() {
        assert_eq!(extract_markers("@startDocuBlockfoo"), vec!["foo"]);
        assert!(contains_marker("text @startDocuBlockfoo\n"));
    }

    #[test]
    fn test_token_without_identifier() {
        assert!(extract_markers("@startDocuBlock\n\n").is_empty());
        assert!(extract_markers("@startDocuBlock").is_empty());
    }

    #[test]
    fn test_marker_in_bytes_that_are_not_utf8() {
        assert!(contains_marker_bytes(b"caf\xe9\n@startDocuBlock foo\n"));
        assert!(contains_marker_bytes(b"@startDocuBlockfoo"));
        assert!(!contains_marker_bytes(b"caf\xe9 notes\n"));
        assert!(!contains_marker_bytes(b"@startDocuBlock \xe9"));
    }
}
