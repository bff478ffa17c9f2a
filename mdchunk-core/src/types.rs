//! Values passed between the chunking stages

use serde::{Deserialize, Serialize};

/// A section of the document introduced by a heading of the configured level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Heading text without the `#` marks, empty for pre-heading content
    pub heading: String,
    /// Trimmed text between this heading and the next one
    pub body: String,
}

impl Segment {
    /// Create a new segment
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
        }
    }

    /// Heading line re-synthesized for the top of a chunk, if any
    pub fn heading_line(&self) -> Option<String> {
        heading_line(&self.heading)
    }

    /// Full standalone text of the segment: heading line, blank line, body
    pub fn full_text(&self) -> String {
        with_heading(&self.heading, &self.body)
    }
}

/// A unit of Markdown ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Heading of the segment this chunk came from
    pub heading: String,
    /// Standalone Markdown text, including the heading line when present
    pub text: String,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            text: text.into(),
        }
    }

    /// Length of the text in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Append `other` after a blank line, keeping this chunk's heading
    pub fn absorb(self, other: &Chunk) -> Chunk {
        Chunk {
            heading: self.heading,
            text: join_paragraphs(&self.text, &other.text),
        }
    }

    /// Prepend `prefix` before a blank line, keeping this chunk's heading
    pub fn prepend(self, prefix: &str) -> Chunk {
        Chunk {
            text: join_paragraphs(prefix, &self.text),
            heading: self.heading,
        }
    }
}

/// One record of `index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name inside the output directory
    pub file: String,
    /// Original, unsanitized heading
    pub heading: String,
    /// Character length of the chunk text
    pub chars: usize,
}

/// Separator placed between joined paragraphs and merged chunks
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

pub(crate) fn join_paragraphs(first: &str, second: &str) -> String {
    let mut joined = String::with_capacity(first.len() + PARAGRAPH_SEPARATOR.len() + second.len());
    joined.push_str(first);
    joined.push_str(PARAGRAPH_SEPARATOR);
    joined.push_str(second);
    joined
}

pub(crate) fn heading_line(heading: &str) -> Option<String> {
    if heading.is_empty() {
        None
    } else {
        Some(format!("# {heading}"))
    }
}

/// Prefix `body` with the heading line for `heading`, trimming the result
pub(crate) fn with_heading(heading: &str, body: &str) -> String {
    match heading_line(heading) {
        Some(line) => join_paragraphs(&line, body).trim().to_string(),
        None => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_with_heading() {
        let segment = Segment::new("Intro", "hello");
        assert_eq!(segment.full_text(), "# Intro\n\nhello");
        assert_eq!(segment.heading_line().as_deref(), Some("# Intro"));
    }

    #[test]
    fn test_full_text_without_heading() {
        let segment = Segment::new("", "  just text \n");
        assert_eq!(segment.full_text(), "just text");
        assert!(segment.heading_line().is_none());
    }

    #[test]
    fn test_heading_with_empty_body() {
        let segment = Segment::new("Lonely", "");
        assert_eq!(segment.full_text(), "# Lonely");
    }

    #[test]
    fn test_char_count_is_unicode_aware() {
        let chunk = Chunk::new("見出し", "# 見出し\n\n本文");
        assert_eq!(chunk.char_count(), 9);
        assert!(chunk.text.len() > chunk.char_count());
    }

    #[test]
    fn test_absorb_and_prepend_keep_own_heading() {
        let a = Chunk::new("A", "# A\n\none");
        let b = Chunk::new("B", "# B\n\ntwo");

        let merged = a.clone().absorb(&b);
        assert_eq!(merged.heading, "A");
        assert_eq!(merged.text, "# A\n\none\n\n# B\n\ntwo");

        let prefixed = b.prepend(&a.text);
        assert_eq!(prefixed.heading, "B");
        assert_eq!(prefixed.text, "# A\n\none\n\n# B\n\ntwo");
    }

    #[test]
    fn test_manifest_entry_json_shape() {
        let entry = ManifestEntry {
            file: "001_page_Intro.md".to_string(),
            heading: "Intro".to_string(),
            chars: 12,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"file":"001_page_Intro.md","heading":"Intro","chars":12}"#
        );
    }
}
