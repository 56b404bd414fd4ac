//! Description cleanup
//!
//! Coordinate cells in the source tables are labelled with small `x`/`y`
//! markers. When a cell is only partly consumed by the coordinate hunt those
//! markers, sometimes with digits still attached, end up in the text that is
//! routed to the description. The passes below run in a fixed order: axis
//! labels are removed before whitespace is collapsed.
//!
//! Only labels that stand at word boundaries are artifacts. An axis letter
//! inside a word, as in `3x4` or `7x7`, is ordinary description text and is
//! kept.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::artifact_patterns::{
    AXIS_BRACKET, AXIS_THEN_DIGITS, DIGITS_THEN_AXIS, LONE_AXIS, WHITESPACE_RUN,
};

static RE_AXIS_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AXIS_BRACKET).expect("valid axis bracket regex"));
static RE_DIGITS_THEN_AXIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DIGITS_THEN_AXIS).expect("valid digits-axis regex"));
static RE_AXIS_THEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AXIS_THEN_DIGITS).expect("valid axis-digits regex"));
static RE_LONE_AXIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LONE_AXIS).expect("valid lone axis regex"));
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WHITESPACE_RUN).expect("valid whitespace regex"));

/// Remove axis-label artifacts and normalise whitespace
///
/// Returns an empty string when nothing but artifacts and whitespace remain.
pub fn strip_artifacts(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let text = RE_AXIS_BRACKET.replace_all(text, "");
    let text = RE_DIGITS_THEN_AXIS.replace_all(&text, "");
    let text = RE_AXIS_THEN_DIGITS.replace_all(&text, "");
    let text = RE_LONE_AXIS.replace_all(&text, "");
    let text = text.replace('\n', " ");

    RE_WHITESPACE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_normalised() {
        assert_eq!(strip_artifacts("  Summit \n\n ridge\t cairn "), "Summit ridge cairn");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(strip_artifacts(" \n "), "");
        assert_eq!(strip_artifacts(""), "");
    }

    #[test]
    fn test_ordinary_words_survive() {
        assert_eq!(strip_artifacts("xylophone yard Xmas"), "xylophone yard Xmas");
    }
}
