//! Command-line interface module.
//!
//! This module provides the CLI structure and the run orchestration for the
//! feuilleton binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::{RunSummary, run_novel};
