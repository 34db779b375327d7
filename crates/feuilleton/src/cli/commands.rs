//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Generate a serialized novel from a configuration document.
#[derive(Debug, Parser)]
#[command(name = "feuilleton", version, about)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,
}
