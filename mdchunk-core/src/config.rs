//! Chunker configuration

use crate::error::{ChunkError, Result};
use serde::{Deserialize, Serialize};

/// Default heading level used for chunk boundaries (`#`)
pub const DEFAULT_LEVEL: u8 = 1;

/// Default oversize split threshold in characters
pub const DEFAULT_MAX_CHARS: usize = 10_000;

/// Default undersize merge threshold in characters
pub const DEFAULT_MIN_CHARS: usize = 200;

/// Default filename prefix
pub const DEFAULT_PREFIX: &str = "page";

/// Configuration for a chunking run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerConfig {
    /// Heading level (1-6) whose headings start a new section
    pub level: u8,
    /// Sections longer than this are re-split on paragraph boundaries
    pub max_chars: usize,
    /// Chunks shorter than this are merged into a neighbour (0 disables)
    pub min_chars: usize,
    /// Whether oversized sections are re-split at all
    pub split_large: bool,
    /// Filename prefix placed after the sequence number
    pub prefix: String,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            max_chars: DEFAULT_MAX_CHARS,
            min_chars: DEFAULT_MIN_CHARS,
            split_large: true,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ChunkerConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> ChunkerConfigBuilder {
        ChunkerConfigBuilder::default()
    }

    /// Check that the configuration can drive a chunking run
    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.level) {
            return Err(ChunkError::Config(format!(
                "heading level must be between 1 and 6, got {}",
                self.level
            )));
        }
        if self.max_chars == 0 {
            return Err(ChunkError::Config(
                "max_chars must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the undersize merge pass runs
    pub fn merges_small_chunks(&self) -> bool {
        self.min_chars > 0
    }
}

/// Builder for [`ChunkerConfig`]
#[derive(Debug, Default)]
pub struct ChunkerConfigBuilder {
    config: ChunkerConfig,
}

impl ChunkerConfigBuilder {
    /// Set the heading level
    pub fn level(mut self, level: u8) -> Self {
        self.config.level = level;
        self
    }

    /// Set the oversize split threshold
    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    /// Set the undersize merge threshold
    pub fn min_chars(mut self, min_chars: usize) -> Self {
        self.config.min_chars = min_chars;
        self
    }

    /// Set the undersize merge threshold from a signed value.
    ///
    /// Zero or negative values disable merging.
    pub fn min_chars_signed(mut self, min_chars: i64) -> Self {
        self.config.min_chars = usize::try_from(min_chars).unwrap_or(0);
        self
    }

    /// Enable or disable oversize splitting
    pub fn split_large(mut self, split_large: bool) -> Self {
        self.config.split_large = split_large;
        self
    }

    /// Set the filename prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ChunkerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChunkerConfig::default();
        assert_eq!(config.level, 1);
        assert_eq!(config.max_chars, 10_000);
        assert_eq!(config.min_chars, 200);
        assert!(config.split_large);
        assert_eq!(config.prefix, "page");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ChunkerConfig::builder()
            .level(2)
            .max_chars(500)
            .min_chars(0)
            .split_large(false)
            .prefix("chunk")
            .build()
            .unwrap();

        assert_eq!(config.level, 2);
        assert_eq!(config.max_chars, 500);
        assert!(!config.merges_small_chunks());
        assert!(!config.split_large);
        assert_eq!(config.prefix, "chunk");
    }

    #[test]
    fn test_invalid_levels_rejected() {
        for level in [0u8, 7, 42] {
            let result = ChunkerConfig::builder().level(level).build();
            assert!(
                matches!(result, Err(ChunkError::Config(_))),
                "level {level} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_max_chars_rejected() {
        let result = ChunkerConfig::builder().max_chars(0).build();
        assert!(matches!(result, Err(ChunkError::Config(_))));
    }

    #[test]
    fn test_negative_min_chars_disables_merging() {
        let config = ChunkerConfig::builder()
            .min_chars_signed(-5)
            .build()
            .unwrap();
        assert_eq!(config.min_chars, 0);
        assert!(!config.merges_small_chunks());

        let config = ChunkerConfig::builder()
            .min_chars_signed(350)
            .build()
            .unwrap();
        assert_eq!(config.min_chars, 350);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ChunkerConfig = serde_json::from_str(r#"{"level": 2, "prefix": "doc"}"#).unwrap();
        assert_eq!(config.level, 2);
        assert_eq!(config.prefix, "doc");
        assert_eq!(config.max_chars, DEFAULT_MAX_CHARS);
    }
}
