//! Command-line entry point.
//!
//! `catalog-analytics [--config FILE] [--seed N] [--output-dir DIR] [run|render]`
//!
//! Without a subcommand it performs a full `run`. The report goes to stdout,
//! logs go to stderr.

use catalog_analytics::charts::ChartFormat;
use catalog_analytics::config::Config;
use catalog_analytics::lifecycle::{setup_tracing, Pipeline, PipelineError};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, info_span};

#[derive(Debug, Parser)]
#[command(name = "catalog-analytics", version, about = "Generate and analyze a synthetic product catalog")]
struct Cli {
    /// TOML file overriding the reference tables and thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory for the CSV and the charts (overrides the config file)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate, report, write the CSV and render charts
    Run {
        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,

        /// Chart image format
        #[arg(long, value_enum)]
        format: Option<ChartFormat>,
    },
    /// Render charts from a previously written CSV
    Render {
        /// CSV written by an earlier run
        #[arg(long)]
        input: PathBuf,

        /// Chart image format
        #[arg(long, value_enum)]
        format: Option<ChartFormat>,
    },
}

fn main() -> ExitCode {
    setup_tracing();
    let cli = Cli::parse();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Run failed");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<(), PipelineError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(seed) = cli.seed {
        config.generator.seed = seed;
    }
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }

    let today = Local::now().date_naive();
    let command = cli.command.unwrap_or(Command::Run {
        no_charts: false,
        format: None,
    });

    match command {
        Command::Run { no_charts, format } => {
            if no_charts {
                config.output.charts = false;
            }
            if let Some(format) = format {
                config.output.chart_format = format;
            }

            let _span = info_span!("run", seed = config.generator.seed).entered();
            let pipeline = Pipeline::new(config, today)?;
            let outcome = pipeline.run(std::io::stdout().lock())?;
            info!(
                csv = %outcome.csv_path.display(),
                charts = outcome.charts.len(),
                "Run complete"
            );
        }
        Command::Render { input, format } => {
            let format = format.unwrap_or(config.output.chart_format);
            let _span = info_span!("render", input = %input.display()).entered();
            let charts = Pipeline::renderer(config, today).render(&input, format)?;
            info!(charts = charts.len(), "Render complete");
        }
    }
    Ok(())
}
