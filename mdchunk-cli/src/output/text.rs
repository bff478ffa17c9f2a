//! Plain text summary formatter

use super::OutputFormatter;
use anyhow::Result;
use mdchunk_core::ManifestEntry;
use std::io::Write;
use std::path::Path;

/// Text formatter - prints a single line once all files are written
pub struct TextFormatter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, _entry: &ManifestEntry) -> Result<()> {
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self, out_dir: &Path) -> Result<()> {
        writeln!(
            self.writer,
            "Wrote {} chunk files to {}",
            self.written,
            out_dir.display()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
