//! End-to-end chunking: split, normalize, emit

use crate::config::ChunkerConfig;
use crate::emitter::Emitter;
use crate::error::Result;
use crate::input::Input;
use crate::normalize::normalize;
use crate::segment::HeadingSplitter;
use crate::types::{Chunk, ManifestEntry};
use std::path::Path;

/// Chunks Markdown documents with a fixed configuration
#[derive(Debug, Clone)]
pub struct MarkdownChunker {
    config: ChunkerConfig,
    splitter: HeadingSplitter,
}

impl MarkdownChunker {
    /// Create a chunker, validating `config`
    pub fn new(config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        let splitter = HeadingSplitter::new(config.level)?;
        Ok(Self { config, splitter })
    }

    /// Current configuration
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk `text` in memory without touching the filesystem
    pub fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        let segments = self.splitter.split(text);
        normalize(segments, &self.config)
    }

    /// Read `input`, chunk it and write the chunks plus `index.json` to `out_dir`
    pub fn chunk_to_dir(&self, input: Input, out_dir: &Path) -> Result<Vec<ManifestEntry>> {
        let text = input.read_text()?;
        let chunks = self.chunk_text(&text);

        let mut emitter = Emitter::create(out_dir, self.config.prefix.as_str())?;
        for chunk in &chunks {
            emitter.emit(chunk)?;
        }
        let manifest = emitter.finish()?;

        log::info!(
            "wrote {} chunk files to {}",
            manifest.len(),
            out_dir.display()
        );
        Ok(manifest)
    }
}

impl Default for MarkdownChunker {
    fn default() -> Self {
        let config = ChunkerConfig::default();
        let splitter = HeadingSplitter::new(config.level)
            .expect("default heading level is valid");
        Self { config, splitter }
    }
}

/// Chunk the Markdown file at `infile` into `out_dir` with `config`
pub fn chunk_markdown_file(
    infile: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &ChunkerConfig,
) -> Result<Vec<ManifestEntry>> {
    let chunker = MarkdownChunker::new(config.clone())?;
    chunker.chunk_to_dir(
        Input::from_file(infile.as_ref().to_path_buf()),
        out_dir.as_ref(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChunkError;

    #[test]
    fn test_default_chunker() {
        let chunker = MarkdownChunker::default();
        assert_eq!(chunker.config(), &ChunkerConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ChunkerConfig {
            level: 9,
            ..ChunkerConfig::default()
        };
        assert!(matches!(
            MarkdownChunker::new(config),
            Err(ChunkError::Config(_))
        ));
    }

    #[test]
    fn test_chunk_text_without_merge() {
        let config = ChunkerConfig::builder().min_chars(0).build().unwrap();
        let chunker = MarkdownChunker::new(config).unwrap();

        let chunks = chunker.chunk_text("# A\n\nhello\n\n# B\n\nworld");
        assert_eq!(
            chunks,
            vec![
                Chunk::new("A", "# A\n\nhello"),
                Chunk::new("B", "# B\n\nworld"),
            ]
        );
    }

    #[test]
    fn test_empty_document_yields_single_empty_chunk() {
        let chunks = MarkdownChunker::default().chunk_text("");
        assert_eq!(chunks, vec![Chunk::new("", "")]);
    }
}
