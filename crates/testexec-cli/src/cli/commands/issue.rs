//! `testexec issue` - read, update, or transition a single issue.

use anyhow::{Context, Result};

use crate::cli::args::{IssueArgs, IssueSub};
use crate::exit_codes::SUCCESS;

use super::helpers::open_session;

pub async fn run(args: IssueArgs) -> Result<i32> {
    let session = open_session(&args.tracker, None)?;

    match args.cmd {
        IssueSub::Show(a) => {
            let issue = session
                .get_issue(&a.key)
                .await
                .with_context(|| format!("failed to fetch {}", a.key))?;
            println!("Key:         {}", issue.key);
            println!(
                "Summary:     {}",
                issue.fields.summary.as_deref().unwrap_or("")
            );
            println!("Status:      {}", issue.status_name().unwrap_or("unknown"));
            println!(
                "Description: {}",
                issue.fields.description.as_deref().unwrap_or("")
            );
        }
        IssueSub::Update(a) => {
            session
                .update_description(&a.key, &a.description)
                .await
                .with_context(|| format!("failed to update {}", a.key))?;
            println!("Updated description of {}", a.key);
        }
        IssueSub::Transition(a) => {
            let applied = session
                .transition_issue(&a.key, &a.to)
                .await
                .with_context(|| format!("failed to transition {}", a.key))?;
            let target = applied
                .to
                .as_ref()
                .map(|s| s.name.as_str())
                .unwrap_or(applied.name.as_str());
            println!("Moved {} to {} (via '{}')", a.key, target, applied.name);
        }
    }
    Ok(SUCCESS)
}
