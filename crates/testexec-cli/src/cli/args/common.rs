//! Arguments shared by several commands.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

pub const DEFAULT_SUMMARY: &str = "Automated Test Execution Creation";

/// Tracker connection overrides. Unset flags fall back to the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct TrackerArgs {
    /// Tracker base URL [env: SERVER]
    #[arg(long)]
    pub server: Option<String>,

    /// Bearer token [env: TOKEN]
    #[arg(long, hide = true)]
    pub token: Option<String>,

    /// Request timeout in seconds [env: TESTEXEC_TIMEOUT]
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Where to find the CSV export.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// CSV file to read (skips discovery)
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Directory searched for the first .csv file when --csv is not given
    /// (default: the executable's directory)
    #[arg(long, value_name = "DIR", env = "TESTEXEC_DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ConnectArgs {
    #[command(flatten)]
    pub tracker: TrackerArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    #[command(flatten)]
    pub tracker: TrackerArgs,

    #[command(flatten)]
    pub input: InputArgs,

    /// Project key for the new issue [env: PROJECT]
    #[arg(long)]
    pub project: Option<String>,

    /// Summary of the new issue
    #[arg(long, default_value = DEFAULT_SUMMARY)]
    pub summary: String,

    /// Print the issue fields instead of creating the issue
    #[arg(long)]
    pub dry_run: bool,
}
