//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--project, --json, --verbose) are inherited by all subcommands
//! - stdout carries the report only; logs and warnings go to stderr

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::output::OutputFormat;

/// Forkwise - deployment environment resolver for contract projects
#[derive(Parser, Debug)]
#[command(name = "forkwise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory (holds forkwise.toml and .env)
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub project: PathBuf,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration for one network
    Show {
        /// Network to show (defaults to the project's default network)
        #[arg(short, long)]
        network: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Print credentials and keys in full
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// List every declared network
    Networks {
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Print credentials and keys in full
        #[arg(long)]
        reveal_secrets: bool,
    },

    /// Print deployment record search paths for a network, one per line
    Paths {
        /// Network to resolve
        #[arg(short, long)]
        network: String,
    },

    /// Validate configuration (non-zero exit on errors)
    Check {
        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Explain inputs and files (for humans/AI assistants)
    Explain {
        /// Short version (just the essentials)
        #[arg(long)]
        brief: bool,
    },
}
