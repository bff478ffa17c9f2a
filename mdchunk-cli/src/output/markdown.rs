//! Markdown summary formatter

use super::OutputFormatter;
use anyhow::Result;
use mdchunk_core::ManifestEntry;
use std::io::Write;
use std::path::Path;

/// Markdown formatter - outputs the emitted files as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            chunk_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer, "| # | File | Heading | Chars |")?;
        writeln!(self.writer, "|---|------|---------|-------|")?;
        Ok(())
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_entry(&mut self, entry: &ManifestEntry) -> Result<()> {
        if self.chunk_count == 0 {
            self.write_header()?;
        }
        self.chunk_count += 1;
        // Pipes would break the table row.
        let heading = entry.heading.replace('|', "\\|");
        writeln!(
            self.writer,
            "| {} | `{}` | {} | {} |",
            self.chunk_count, entry.file, heading, entry.chars
        )?;
        Ok(())
    }

    fn finish(&mut self, out_dir: &Path) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total chunks: {}* in `{}`",
            self.chunk_count,
            out_dir.display()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
