use anyhow::{Context, Result};
use clap::Parser;
use logmetrics_core::cli::metrics::run_metrics;
use logmetrics_core::conf::{MetricsConfig, load_config, validate_config};
use logmetrics_core::logging::{LogFormat, init_logging};
use logmetrics_core::report::{OutputFormat, render_report};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logmetrics",
    version,
    about = "Answer one metrics query against a server activity log"
)]
struct Cli {
    /// Path of the server_log.csv file to compute metrics for
    #[arg(long, alias = "logFilePath")]
    log_file_path: Option<PathBuf>,

    /// Metrics query: usersAccessed, uploadsGreaterThan[N], uploadsLessThan[N],
    /// downloadsGreaterThan[N], downloadsLessThan[N],
    /// uploadsByUser[USER]OnDate[DD MM YYYY], downloadsByUser[USER]OnDate[DD MM YYYY]
    #[arg(long, alias = "metricsQuery")]
    metrics_query: Option<String>,

    /// Optional HCL config file; flags given on the command line win
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to print the result
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,

    /// chrono format of the log's timestamp column
    #[arg(long)]
    timestamp_format: Option<String>,

    /// Format of diagnostic logs on stderr
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = Cli::parse();

    let cfg = match resolve_config(cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&cfg.logging);

    if let Err(e) = run(&cfg) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn resolve_config(cli: Cli) -> Result<MetricsConfig> {
    let mut cfg = match &cli.config {
        Some(path) => load_config(path)?,
        None => MetricsConfig::default(),
    };

    if let Some(path) = cli.log_file_path {
        cfg.log_file_path = path;
    }
    if let Some(query) = cli.metrics_query {
        cfg.metrics_query = query;
    }
    if let Some(output) = cli.output {
        cfg.output = output;
    }
    if let Some(format) = cli.timestamp_format {
        cfg.timestamp_format = format;
    }
    if let Some(format) = cli.log_format {
        cfg.logging.format = format;
    }

    validate_config(&cfg)?;
    Ok(cfg)
}

fn run(cfg: &MetricsConfig) -> Result<()> {
    let report = run_metrics(cfg)?;
    let line = render_report(&report, cfg.output).context("failed to render report")?;
    println!("{line}");
    Ok(())
}
