//! CLI command definitions for the `slsart` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod script;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Generate Artillery load-test scripts interactively.
#[derive(Parser)]
#[command(name = "slsart", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a load-test script through the interactive wizard.
    Script,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
