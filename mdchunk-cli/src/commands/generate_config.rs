//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use mdchunk_core::ChunkerConfig;
use std::fs;
use std::path::PathBuf;

use crate::config::DEFAULT_OUT_DIR;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating chunking configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to suit your documents");
        println!("2. Validate your configuration:");
        println!("   mdchunk validate -c {}", self.output.display());
        println!("3. Use it for chunking:");
        println!("   mdchunk chunk input.md --config {}", self.output.display());

        Ok(())
    }
}

/// Template configuration content carrying the built-in defaults
pub fn generate_template() -> String {
    let defaults = ChunkerConfig::default();
    format!(
        r#"# mdchunk configuration
#
# Command-line flags take precedence over the values below.

[chunking]
# Heading level (1-6) whose headings start a new chunk
level = {level}

# Sections longer than this many characters are split at paragraph breaks
max_chars = {max_chars}

# Chunks shorter than this many characters are merged into a neighbour.
# Zero or a negative value disables merging.
min_chars = {min_chars}

# Set to false to keep oversized sections whole
split_large = {split_large}

# Placed between the sequence number and the heading in file names
prefix = "{prefix}"

[output]
# Directory receiving the chunk files and index.json
out_dir = "{out_dir}"

# Summary printed after a run: "text", "json" or "markdown"
format = "text"
"#,
        level = defaults.level,
        max_chars = defaults.max_chars,
        min_chars = defaults.min_chars,
        split_large = defaults.split_large,
        prefix = defaults.prefix,
        out_dir = DEFAULT_OUT_DIR,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChunkingConfig, CliConfig};
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("mdchunk.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("mdchunk.toml"));
    }

    #[test]
    fn test_template_describes_defaults() {
        let config = CliConfig::from_toml(&generate_template()).unwrap();
        let chunker = config.chunker_config(&ChunkingConfig::default()).unwrap();

        assert_eq!(chunker, ChunkerConfig::default());
        assert_eq!(config.out_dir(None), PathBuf::from(DEFAULT_OUT_DIR));
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("mdchunk.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[chunking]"));
        assert!(content.contains("prefix = \"page\""));
    }

    #[test]
    fn test_execute_unwritable_path() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/mdchunk.toml"),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
