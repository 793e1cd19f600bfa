#![warn(missing_docs)]
//! benchtab CLI Library
//!
//! Command line front-end for rendering benchmark results collected by an
//! external harness. Results are read as JSON, resolved against
//! `benchtab.toml` and command line settings, and printed as a plain text table.
//!
//! # Example
//!
//! ```text
//! $ benchtab results.json --time-unit us
//! name         time   std        iterations
//! -----------------------------------------
//! MySuite.fast 1.5 us ±  47.14 %          2
//! ```

mod config;
mod input;

pub use config::*;
pub use input::{apply_settings, load_results, parse_results};

use benchtab_core::{BenchmarkSettings, TimeUnit};
use benchtab_report::{BenchmarkReporter, LineSink, PlainTextReporter, WriterSink};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// benchtab CLI arguments
#[derive(Parser, Debug)]
#[command(name = "benchtab")]
#[command(author, version, about = "benchtab - render benchmark results as a text table")]
pub struct Cli {
    /// Optional subcommand (Render, Init); defaults to Render
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Results JSON file (stdin if omitted or "-")
    pub input: Option<PathBuf>,

    /// Configuration file (discovered from the current directory if not specified)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Force this time unit for every benchmark: ns, us, ms, s
    #[arg(long)]
    pub time_unit: Option<TimeUnit>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render results as a table (default)
    Render,
    /// Print a default benchtab.toml
    Init,
}

/// Run the benchtab CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the benchtab CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", BenchtabConfig::default_toml());
            Ok(())
        }
        Some(Commands::Render) | None => {
            let config = match &cli.config {
                Some(path) => BenchtabConfig::load(path)?,
                None => BenchtabConfig::discover().unwrap_or_default(),
            };

            // --output wins over [output] path
            let output = cli.output.clone().or_else(|| config.output.path.clone());
            let sink: Box<dyn LineSink> = match output {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        anyhow::anyhow!("Failed to create {}: {}", path.display(), e)
                    })?;
                    Box::new(WriterSink::new(BufWriter::new(file)))
                }
                None => Box::new(WriterSink::new(std::io::stdout().lock())),
            };

            render(&cli, &config, sink)?;
            Ok(())
        }
    }
}

/// Load, resolve and report results to `sink`
///
/// Returns the number of results reported.
pub fn render<S: LineSink>(cli: &Cli, config: &BenchtabConfig, sink: S) -> anyhow::Result<usize> {
    let results = load_results(cli.input.as_deref())?;

    let overrides = BenchmarkSettings {
        time_unit: cli.time_unit,
    };
    let results = apply_settings(results, &config.default_settings(), &overrides);

    let mut reporter = PlainTextReporter::new(sink);
    reporter.report(&results)?;

    tracing::info!(benchmarks = results.len(), "Report written");
    Ok(results.len())
}

/// Initialize logging on stderr; the table itself goes to stdout
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "benchtab=debug"
    } else {
        "benchtab=info"
    };

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
