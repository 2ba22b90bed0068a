//! Whole-input markdown link splitting.
//!
//! A pasted link like `[Age of Empires](file:///C:/Games/AoE)` should
//! contribute both a title line and a body line. This only applies when the
//! entire input is one link, so the match is anchored over the whole string.

use regex::Regex;
use std::sync::LazyLock;

/// Matches an input that is exactly one markdown link: `[text](url)`.
///
/// `.` does not cross newlines, so a multiline paste never matches.
static WHOLE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[(.*)\]\((.*)\)$").unwrap());

/// Fast pre-filter: skip the regex when the shape is impossible.
#[inline]
fn looks_like_link(input: &str) -> bool {
    input.starts_with('[') && input.ends_with(')')
}

/// Split an input that is exactly one markdown link into display text and
/// link target.
pub fn split_markdown_link(input: &str) -> Option<(&str, &str)> {
    if !looks_like_link(input) {
        return None;
    }

    WHOLE_LINK.captures(input).map(|caps| {
        let text = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let url = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        (text, url)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_whole_input_link() {
        let input = "[Age of Empires](file:///C:/Games/AoE)";
        let (text, url) = split_markdown_link(input).unwrap();
        assert_eq!(text, "Age of Empires");
        assert_eq!(url, "file:///C:/Games/AoE");
    }

    #[test]
    fn test_inner_brackets_stay_in_the_text() {
        let (text, url) = split_markdown_link("[a [b]](c)").unwrap();
        assert_eq!(text, "a [b]");
        assert_eq!(url, "c");
    }

    #[test]
    fn test_empty_text_and_target() {
        assert_eq!(split_markdown_link("[]()"), Some(("", "")));
    }

    #[test]
    fn test_plain_text_does_not_match() {
        assert_eq!(split_markdown_link("just a note title"), None);
    }

    #[test]
    fn test_surrounding_text_does_not_match() {
        assert_eq!(split_markdown_link("see [a](b)"), None);
        assert_eq!(split_markdown_link("[a](b) trailing"), None);
    }

    #[test]
    fn test_multiline_input_does_not_match() {
        assert_eq!(split_markdown_link("[a](b)\nmore"), None);
        assert_eq!(split_markdown_link("[a\nb](c)"), None);
    }
}
