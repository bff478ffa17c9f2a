//! Filename sanitation for chunk files

use regex::Regex;
use std::sync::LazyLock;

/// Longest sanitized name, in characters, including the `...` marker
pub const MAX_FILENAME_CHARS: usize = 60;

/// Name used when nothing survives sanitation
pub const FALLBACK_NAME: &str = "untitled";

const TRUNCATION_MARKER: &str = "...";

const FORBIDDEN: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Turn a heading into a filesystem-friendly name component.
///
/// Strips surrounding whitespace, drops characters that are not allowed in
/// filenames on common platforms, replaces whitespace runs with `_` and
/// truncates to [`MAX_FILENAME_CHARS`].
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name.trim().chars().filter(|c| !FORBIDDEN.contains(c)).collect();
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, "_");

    let sanitized = if cleaned.chars().count() > MAX_FILENAME_CHARS {
        let keep = MAX_FILENAME_CHARS - TRUNCATION_MARKER.len();
        let mut truncated: String = cleaned.chars().take(keep).collect();
        truncated.push_str(TRUNCATION_MARKER);
        truncated
    } else {
        cleaned.into_owned()
    };

    if sanitized.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_characters_removed() {
        assert_eq!(
            sanitize_filename("Intro: Getting Started? / Overview"),
            "Intro_Getting_Started_Overview"
        );
        assert_eq!(sanitize_filename(r#"a\b/c:d*e?f"g<h>i|j"#), "abcdefghij");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(sanitize_filename("  many   spaces\tand\nlines  "), "many_spaces_and_lines");
    }

    #[test]
    fn test_truncation() {
        let long = "x".repeat(80);
        let name = sanitize_filename(&long);
        assert_eq!(name.chars().count(), MAX_FILENAME_CHARS);
        assert!(name.ends_with("..."));
        assert_eq!(&name[..57], "x".repeat(57));
    }

    #[test]
    fn test_exactly_max_is_not_truncated() {
        let exact = "y".repeat(MAX_FILENAME_CHARS);
        assert_eq!(sanitize_filename(&exact), exact);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let long = "日本語".repeat(30);
        let name = sanitize_filename(&long);
        assert_eq!(name.chars().count(), MAX_FILENAME_CHARS);
        assert!(name.starts_with("日本語"));
    }

    #[test]
    fn test_empty_falls_back() {
        assert_eq!(sanitize_filename(""), "untitled");
        assert_eq!(sanitize_filename("   "), "untitled");
        assert_eq!(sanitize_filename("???"), "untitled");
    }

    #[test]
    fn test_part_name_passes_through() {
        assert_eq!(sanitize_filename("part_3"), "part_3");
    }
}
