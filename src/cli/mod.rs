//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fraudlens - rule-based fraud detection KPI pipeline.
#[derive(Parser, Debug)]
#[command(name = "fraudlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate data, apply fraud rules, and write the KPI report and chart
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `fraudlens check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (built-in defaults are used if missing)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the generator RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of records to generate
    #[arg(long)]
    pub records: Option<usize>,

    /// Override the KPI report output path
    #[arg(long)]
    pub csv_out: Option<PathBuf>,

    /// Override the trend chart output path
    #[arg(long)]
    pub chart_out: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    pub no_chart: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
