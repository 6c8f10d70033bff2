use clap::{Parser, Subcommand};

pub mod common;
pub mod issue;
pub use common::*;
pub use issue::*;


#[derive(Parser)]
#[command(
    name = "testexec",
    version,
    about = "Create Test Execution issues from CSV test result exports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that the tracker is reachable and the token is accepted
    Connect(ConnectArgs),
    /// Reduce the CSV export to ticket keys and their worst status (offline)
    Extract(ExtractArgs),
    /// Create a Test Execution issue from the CSV export
    Create(CreateArgs),
    /// Read or change a single issue
    Issue(IssueArgs),
}
