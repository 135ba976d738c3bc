// crates/unescape_line_breaks/src/lib.rs

/// Line-break markup emitted by the comment extractor.
pub const LINE_BREAK_MARKUP: &str = "<br />";

/// Converts literal "<br />" sequences in the input string to actual newline characters.
pub fn unescape_line_breaks(input: &str) -> String {
    input.replace(LINE_BREAK_MARKUP, "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_line_break_markup() {
        let input = "This is a test.";
        assert_eq!(unescape_line_breaks(input), "This is a test.");
    }

    #[test]
    fn test_single_line_break() {
        let input = "Line1<br />Line2";
        assert_eq!(unescape_line_breaks(input), "Line1\nLine2");
    }

    #[test]
    fn test_line_break_at_beginning_and_end() {
        let input = "<br />Line1<br />";
        assert_eq!(unescape_line_breaks(input), "\nLine1\n");
    }

    #[test]
    fn test_consecutive_line_breaks() {
        let input = "Line1<br /><br />Line2";
        assert_eq!(unescape_line_breaks(input), "Line1\n\nLine2");
    }

    #[test]
    fn test_other_break_spellings_are_left_alone() {
        // Only the exact form written by the extractor is converted.
        let input = "a<br>b<br/>c";
        assert_eq!(unescape_line_breaks(input), input);
    }
}
