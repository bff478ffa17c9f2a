//! JSON summary formatter

use super::OutputFormatter;
use anyhow::Result;
use mdchunk_core::ManifestEntry;
use std::io::Write;
use std::path::Path;

/// JSON formatter - prints the manifest as a pretty JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<ManifestEntry>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, entry: &ManifestEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self, _out_dir: &Path) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
