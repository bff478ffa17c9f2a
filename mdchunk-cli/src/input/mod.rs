//! Input handling module

pub mod file_reader;

pub use file_reader::FileReader;

use crate::error::CliError;
use anyhow::Result;
use mdchunk_core::Input;
use std::io;
use std::path::Path;

/// Argument value that selects standard input
pub const STDIN_ARG: &str = "-";

/// Read the Markdown text named by a command-line argument
pub fn read_input(arg: &Path) -> Result<String> {
    if arg.as_os_str() == STDIN_ARG {
        log::info!("Reading Markdown from stdin");
        return Ok(Input::from_reader(io::stdin()).read_text()?);
    }

    if !arg.is_file() {
        return Err(CliError::FileNotFound(arg.display().to_string()).into());
    }

    log::info!(
        "Reading {} ({} bytes)",
        arg.display(),
        FileReader::file_size(arg)?
    );
    FileReader::read_text(arg)
}
