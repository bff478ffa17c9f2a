//! Heading splitter
//!
//! Partitions a Markdown document into [`Segment`]s at headings of one
//! configured level. Headings of other levels are ordinary body text.

use crate::error::{ChunkError, Result};
use crate::types::Segment;
use regex::Regex;

/// Splits documents on headings of a single level
#[derive(Debug, Clone)]
pub struct HeadingSplitter {
    level: u8,
    pattern: Regex,
}

impl HeadingSplitter {
    /// Compile the heading pattern for `level` (1-6)
    pub fn new(level: u8) -> Result<Self> {
        if !(1..=6).contains(&level) {
            return Err(ChunkError::Config(format!(
                "heading level must be between 1 and 6, got {level}"
            )));
        }

        // Exactly `level` hashes: the next char, if any, must not be another '#'.
        // The capture never crosses a line break; a trailing '\r' is dropped.
        let pattern = Regex::new(&format!(
            r"(?m)^#{{{level}}}([^#\r\n][^\r\n]*)?\r?$"
        ))?;

        Ok(Self { level, pattern })
    }

    /// Heading level this splitter matches
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Split `text` into ordered segments.
    ///
    /// A document without any matching heading becomes a single segment
    /// with an empty heading.
    pub fn split(&self, text: &str) -> Vec<Segment> {
        // A bare `#` line has no heading text and is kept as body text.
        let matches: Vec<_> = self
            .pattern
            .captures_iter(text)
            .filter(|caps| caps.get(1).is_some_and(|m| !m.as_str().trim().is_empty()))
            .collect();

        let Some(first) = matches.first() else {
            log::debug!("no level-{} headings found, keeping document whole", self.level);
            return vec![Segment::new("", text.trim())];
        };

        let mut segments = Vec::with_capacity(matches.len() + 1);

        let first_start = first.get(0).map_or(0, |m| m.start());
        if first_start > 0 {
            let preamble = text[..first_start].trim();
            if !preamble.is_empty() {
                segments.push(Segment::new("", preamble));
            }
        }

        for (i, caps) in matches.iter().enumerate() {
            let Some(line) = caps.get(0) else { continue };
            let heading = caps.get(1).map_or("", |m| m.as_str()).trim();
            let end = matches
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());

            segments.push(Segment::new(heading, text[line.end()..end].trim()));
        }

        log::debug!(
            "split document into {} segments at level {}",
            segments.len(),
            self.level
        );
        segments
    }
}
