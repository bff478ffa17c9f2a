//! mdchunk command-line entry point

use clap::Parser;
use mdchunk_cli::commands::Commands;
use std::process::ExitCode;

/// Split Markdown documents into heading-aware chunk files
#[derive(Debug, Parser)]
#[command(name = "mdchunk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
