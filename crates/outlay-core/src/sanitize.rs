//! Input sanitization for user-entered text
//!
//! Descriptions are sanitized on every write path before they reach the
//! collection or storage: script and style elements are removed along with
//! their content, any remaining markup tags are stripped (their text is
//! kept), and the result is trimmed.

use regex::Regex;

/// Strip markup from user-entered text and trim surrounding whitespace.
pub fn sanitize_text(input: &str) -> String {
    // Using (?is) so . matches newlines and tag names match any case
    let script_re = Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("valid regex");
    let style_re = Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").expect("valid regex");
    let tag_re = Regex::new(r"<[^>]*>").expect("valid regex");

    let without_scripts = script_re.replace_all(input, "");
    let without_styles = style_re.replace_all(&without_scripts, "");
    let without_tags = tag_re.replace_all(&without_styles, "");
    without_tags.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_text("Grocery run"), "Grocery run");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize_text("  Hello  "), "Hello");
    }

    #[test]
    fn test_script_content_removed() {
        assert_eq!(
            sanitize_text("<script>alert(\"xss\")</script>Clean text"),
            "Clean text"
        );
    }

    #[test]
    fn test_style_content_removed() {
        assert_eq!(sanitize_text("<style>body{color:red}</style>Lunch"), "Lunch");
    }

    #[test]
    fn test_tags_stripped_content_kept() {
        assert_eq!(sanitize_text("<div><p>Hello</p></div>"), "Hello");
        assert_eq!(sanitize_text("<b>Coffee</b> with milk"), "Coffee with milk");
    }

    #[test]
    fn test_mixed_case_script() {
        assert_eq!(sanitize_text("<SCRIPT>evil()</SCRIPT>Safe"), "Safe");
    }

    #[test]
    fn test_all_markup_becomes_empty() {
        assert_eq!(sanitize_text("<b></b>"), "");
        assert_eq!(sanitize_text("<script>only()</script>"), "");
    }
}
