use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

// `---` at the very start, up to the next `---`. the closing delimiter may
// touch the opening one ("------") but never overlap it.
fn header_pattern() -> &'static Regex {
    static HEADER_PATTERN: OnceLock<Regex> = OnceLock::new();
    HEADER_PATTERN.get_or_init(|| {
        RegexBuilder::new(r"\A---.*?---")
            .dot_matches_new_line(true)
            .build()
            .unwrap()
    })
}

/// Drops a leading metadata block and trims what follows it.
/// Content without a complete block is returned as it is.
pub fn strip(content: &str) -> &str {
    match header_pattern().find(content) {
        Some(header) => content[header.end()..].trim(),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header() {
        let content = "# Hello\n\nbody --- with dashes\n";
        assert_eq!(strip(content), content);
        assert_eq!(strip(" ---\ntitle: x\n---\n"), " ---\ntitle: x\n---\n");
    }

    #[test]
    fn test_well_formed_header() {
        let content = "---\ntitle: old\ntags: [a]\n---\n\n# Hello\n\nworld\n\n";
        assert_eq!(strip(content), "# Hello\n\nworld");
    }

    #[test]
    fn test_crlf_header() {
        assert_eq!(strip("---\r\ntitle: old\r\n---\r\nbody\r\n"), "body");
    }

    #[test]
    fn test_unterminated_header_passes_through() {
        let content = "---\ntitle: old\n\nbody";
        assert_eq!(strip(content), content);
    }

    #[test]
    fn test_closing_delimiter_search_starts_after_opening() {
        assert_eq!(strip("------rest"), "rest");
        assert_eq!(strip("-----rest"), "-----rest");
        assert_eq!(strip("---a---b---c"), "b---c");
    }
}
