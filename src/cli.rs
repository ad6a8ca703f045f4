//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docsite configuration resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file path (`.json` is read as JSON, anything else as TOML)
    #[arg(short = 'C', long, default_value = "docsite.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the config and print warnings
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Resolve the config and write the site manifest as JSON
    Manifest {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
