//! Run summary formatting

use anyhow::Result;
use mdchunk_core::ManifestEntry;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Trait for run summary formatters
pub trait OutputFormatter {
    /// Record one emitted chunk file
    fn format_entry(&mut self, entry: &ManifestEntry) -> Result<()>;

    /// Write the summary for a run that wrote into `out_dir`
    fn finish(&mut self, out_dir: &Path) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported summary formats
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line naming the file count and output directory
    #[default]
    Text,
    /// The manifest as a JSON array
    Json,
    /// A Markdown table of the emitted files
    Markdown,
}

/// Build the formatter for `format` over `writer`
pub fn formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Feed a whole manifest through `formatter`
pub fn write_summary(
    formatter: &mut dyn OutputFormatter,
    manifest: &[ManifestEntry],
    out_dir: &Path,
) -> Result<()> {
    for entry in manifest {
        formatter.format_entry(entry)?;
    }
    formatter.finish(out_dir)
}
