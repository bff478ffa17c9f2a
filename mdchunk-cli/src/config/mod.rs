//! Configuration file support
//!
//! Values are resolved in three layers: built-in defaults, then the TOML
//! configuration file, then command-line flags.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use mdchunk_core::ChunkerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory used when neither the flags nor the file name one
pub const DEFAULT_OUT_DIR: &str = "./md_chunks";

/// CLI configuration file structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[chunking]` section; unset keys fall back to the built-in defaults
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChunkingConfig {
    /// Heading level used for chunk boundaries
    pub level: Option<u8>,
    /// Oversize split threshold in characters
    pub max_chars: Option<usize>,
    /// Undersize merge threshold; zero or negative disables merging
    pub min_chars: Option<i64>,
    /// Re-split oversized sections
    pub split_large: Option<bool>,
    /// Filename prefix
    pub prefix: Option<String>,
}

/// `[output]` section
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving chunk files and `index.json`
    pub out_dir: Option<PathBuf>,
    /// Run summary format
    pub format: Option<OutputFormat>,
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Build a validated chunker configuration, letting `overrides` win
    pub fn chunker_config(&self, overrides: &ChunkingConfig) -> Result<ChunkerConfig> {
        let merged = self.chunking.overlay(overrides);
        let defaults = ChunkerConfig::default();

        let mut builder = ChunkerConfig::builder()
            .level(merged.level.unwrap_or(defaults.level))
            .max_chars(merged.max_chars.unwrap_or(defaults.max_chars))
            .split_large(merged.split_large.unwrap_or(defaults.split_large))
            .prefix(merged.prefix.unwrap_or(defaults.prefix));
        if let Some(min_chars) = merged.min_chars {
            builder = builder.min_chars_signed(min_chars);
        }

        builder.build().map_err(|e| CliError::from(e).into())
    }

    /// Output directory, letting `override_dir` win
    pub fn out_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.output.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    /// Summary format, letting `override_format` win
    pub fn format(&self, override_format: Option<OutputFormat>) -> OutputFormat {
        override_format
            .or(self.output.format)
            .unwrap_or_default()
    }
}

impl ChunkingConfig {
    /// Values from `other` where set, otherwise from `self`
    pub fn overlay(&self, other: &ChunkingConfig) -> ChunkingConfig {
        ChunkingConfig {
            level: other.level.or(self.level),
            max_chars: other.max_chars.or(self.max_chars),
            min_chars: other.min_chars.or(self.min_chars),
            split_large: other.split_large.or(self.split_large),
            prefix: other.prefix.clone().or_else(|| self.prefix.clone()),
        }
    }
}
