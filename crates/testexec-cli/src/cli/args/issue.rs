//! Issue command arguments.

use clap::{Args, Subcommand};

use super::TrackerArgs;

#[derive(Args, Debug, Clone)]
pub struct IssueArgs {
    #[command(flatten)]
    pub tracker: TrackerArgs,

    #[command(subcommand)]
    pub cmd: IssueSub,
}

#[derive(Subcommand, Debug, Clone)]
pub enum IssueSub {
    /// Print summary, status and description
    Show(IssueKeyArgs),
    /// Replace the description
    Update(IssueUpdateArgs),
    /// Move the issue to another status
    Transition(IssueTransitionArgs),
}

#[derive(Args, Debug, Clone)]
pub struct IssueKeyArgs {
    /// Issue key (e.g. PROJ-5500)
    #[arg(value_name = "KEY")]
    pub key: String,
}

#[derive(Args, Debug, Clone)]
pub struct IssueUpdateArgs {
    #[arg(value_name = "KEY")]
    pub key: String,

    /// New description text
    #[arg(long)]
    pub description: String,
}

#[derive(Args, Debug, Clone)]
pub struct IssueTransitionArgs {
    #[arg(value_name = "KEY")]
    pub key: String,

    /// Transition name or target status (case-insensitive)
    #[arg(long = "to", value_name = "STATUS")]
    pub to: String,
}
