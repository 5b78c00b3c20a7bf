//! Tinycheck - Main entry point
//!
//! Command-line runner over the built-in sample suites: `list` renders the
//! discovered test tree, `run` executes cases and reports their outcomes.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;
use tinycheck::{
    builtin_registry, render_tree, Config, ConsoleReporter, Filter, JsonReporter, OutputFormat,
    RunOptions, Runner,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Miniature test runner with fixtures, parametrization, and skip markers.
#[derive(Parser)]
#[command(name = "tinycheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the discovered test tree
    List,
    /// Run the discovered tests and report outcomes
    Run {
        /// Only run cases whose path matches this pattern (regex or substring)
        #[arg(long)]
        filter: Option<String>,

        /// Report output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Stop after the first failed or errored case
        #[arg(long)]
        fail_fast: bool,
    },
}

/// CLI mirror of [`OutputFormat`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Per-case status lines plus a summary
    Text,
    /// One JSON document with the full run summary
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration before logging so LOG_LEVEL from .env applies
    let config = Config::from_env()?;

    // Initialize logging (stderr only, stdout carries the report output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let registry = builtin_registry()?;
    info!("Registry built with {} collected cases", registry.collect().len());

    match cli.command {
        Command::List => {
            let ids: Vec<_> = registry.collect().into_iter().map(|c| c.id).collect();
            print!("{}", render_tree(&ids));
            Ok(ExitCode::SUCCESS)
        }
        Command::Run {
            filter,
            format,
            fail_fast,
        } => {
            let options = RunOptions {
                filter: filter.as_deref().map(Filter::new),
                fail_fast: fail_fast || config.fail_fast,
            };
            let format = format.map_or(config.output_format, OutputFormat::from);
            let runner = Runner::new(&registry, options);

            let summary = match format {
                OutputFormat::Text => {
                    let mut reporter = ConsoleReporter::new(std::io::stdout());
                    runner.run(&mut reporter)
                }
                OutputFormat::Json => {
                    let mut reporter = JsonReporter::new(std::io::stdout());
                    runner.run(&mut reporter)
                }
            };

            if summary.has_failures() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
