//! Validate command implementation

use crate::config::{ChunkingConfig, CliConfig};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::load(&self.config).and_then(|file_config| {
            let chunker = file_config.chunker_config(&ChunkingConfig::default())?;
            Ok((file_config, chunker))
        });

        match checked {
            Ok((file_config, chunker)) => {
                println!("✓ Configuration is valid!");
                println!("  Heading level: {}", chunker.level);
                println!("  Max chars: {}", chunker.max_chars);
                if chunker.merges_small_chunks() {
                    println!("  Min chars: {}", chunker.min_chars);
                } else {
                    println!("  Min chars: merging disabled");
                }
                println!("  Split large: {}", chunker.split_large);
                println!("  Prefix: {}", chunker.prefix);
                println!("  Output dir: {}", file_config.out_dir(None).display());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("mdchunk.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("mdchunk.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let temp_file = config_file(
            r#"
[chunking]
level = 2
max_chars = 2000
min_chars = -5

[output]
format = "json"
"#,
        );

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_out_of_range_level() {
        let temp_file = config_file("[chunking]\nlevel = 7\n");

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().starts_with("Validation failed:"));
        assert!(err.to_string().contains("heading level"));
    }

    #[test]
    fn test_validate_zero_max_chars() {
        let temp_file = config_file("[chunking]\nmax_chars = 0\n");

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }

    #[test]
    fn test_validate_malformed_toml() {
        let temp_file = config_file("[chunking\nlevel = 2\n");

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
