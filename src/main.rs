//! Forkwise CLI - deployment environment resolver
//!
//! Usage: forkwise <COMMAND>
//!
//! Commands:
//!   show      Resolved configuration for one network
//!   networks  Every declared network
//!   paths     Deployment record search paths
//!   check     Validate configuration
//!   explain   Inputs and files

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use forkwise::presentation::cli::{Cli, Commands};
use forkwise::presentation::OutputFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod ui;

/// Overrides the `-v` derived log level, e.g. `FORKWISE_LOG=forkwise=trace`
const LOG_ENV: &str = "FORKWISE_LOG";

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(format!("forkwise={level}")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ui::terminal::detect_stderr_capabilities().supports_color)
        .compact()
        .with_target(false)
        .with_level(true);

    // A second init (tests embedding main) is harmless.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn project_root(dir: &Path) -> Result<PathBuf> {
    let start = dir
        .canonicalize()
        .with_context(|| format!("project directory '{}' not found", dir.display()))?;
    let root = commands::project_root::discover_project_root(&start);
    tracing::debug!(root = %root.display(), "project root");
    Ok(root)
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Show {
            network,
            format,
            reveal_secrets,
        } => commands::show::cmd_show(
            &project_root(&cli.project)?,
            network.as_deref(),
            OutputFormat::effective(format, cli.json),
            reveal_secrets,
        )
        .map(|()| true),
        Commands::Networks {
            format,
            reveal_secrets,
        } => commands::networks::cmd_networks(
            &project_root(&cli.project)?,
            OutputFormat::effective(format, cli.json),
            reveal_secrets,
        )
        .map(|()| true),
        Commands::Paths { network } => {
            commands::paths::cmd_paths(&project_root(&cli.project)?, &network, cli.json).map(|()| true)
        }
        Commands::Check { strict_warnings } => {
            let root = project_root(&cli.project)?;
            commands::check::cmd_check(&root, strict_warnings, cli.json, cli.verbose)
        }
        Commands::Explain { brief } => {
            commands::explain::cmd_explain(brief, cli.json, cli.verbose).map(|()| true)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}
