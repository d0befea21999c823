//! Command-line argument parsing
//!
//! One optional positional argument naming the input file. There are no
//! other flags beyond clap's `--help` and `--version`.

use clap::Parser;
use std::path::PathBuf;

/// Print every circular shift of every input line, alphabetized
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "kwic",
    version,
    about = "Key-word-in-context index of a text file"
)]
pub struct CliArgs {
    /// File to index (defaults to the configured input, normally input.txt)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}
