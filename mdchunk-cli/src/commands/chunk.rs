//! Chunk command implementation

use crate::config::{ChunkingConfig, CliConfig};
use crate::input::read_input;
use crate::output::{self, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use mdchunk_core::{Chunk, Emitter, ManifestEntry, MarkdownChunker};
use std::io;
use std::path::{Path, PathBuf};

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Markdown file to split ("-" reads stdin)
    #[arg(value_name = "INFILE")]
    pub input: PathBuf,

    /// Directory receiving the chunk files [default: ./md_chunks]
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Heading level that starts a new chunk (1-6) [default: 1]
    #[arg(short, long, value_name = "N")]
    pub level: Option<u8>,

    /// Split sections longer than this many characters [default: 10000]
    #[arg(long, value_name = "CHARS")]
    pub max_chars: Option<usize>,

    /// Merge chunks shorter than this many characters, 0 or less disables [default: 200]
    #[arg(long, value_name = "CHARS", allow_negative_numbers = true)]
    pub min_chars: Option<i64>,

    /// Filename prefix placed after the sequence number [default: page]
    #[arg(short, long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Keep oversized sections whole
    #[arg(long)]
    pub no_split_large: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "MDCHUNK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Summary format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {self:?}");

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = file_config.chunker_config(&self.overrides())?;
        let out_dir = file_config.out_dir(self.out_dir.as_deref());
        let format = file_config.format(self.format);

        let chunker = MarkdownChunker::new(config)?;
        let text = read_input(&self.input)?;
        let chunks = chunker.chunk_text(&text);
        log::info!("Split {} into {} chunks", self.input.display(), chunks.len());

        let manifest = self.write_chunks(&chunker, &chunks, &out_dir)?;

        let stdout = io::stdout();
        let mut formatter = output::formatter(format, stdout.lock());
        output::write_summary(formatter.as_mut(), &manifest, &out_dir)
    }

    /// Flag values, unset where the flag was not given
    fn overrides(&self) -> ChunkingConfig {
        ChunkingConfig {
            level: self.level,
            max_chars: self.max_chars,
            min_chars: self.min_chars,
            split_large: self.no_split_large.then_some(false),
            prefix: self.prefix.clone(),
        }
    }

    fn write_chunks(
        &self,
        chunker: &MarkdownChunker,
        chunks: &[Chunk],
        out_dir: &Path,
    ) -> Result<Vec<ManifestEntry>> {
        let mut emitter = Emitter::create(out_dir, chunker.config().prefix.clone())
            .with_context(|| format!("Failed to prepare {}", out_dir.display()))?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_chunks(chunks.len() as u64);

        for chunk in chunks {
            let entry = emitter.emit(chunk)?;
            progress.chunk_written(&entry.file);
        }
        progress.finish();

        let manifest = emitter.finish()?;
        log::info!("Wrote manifest for {} files", manifest.len());
        Ok(manifest)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when run more than once in-process.
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
