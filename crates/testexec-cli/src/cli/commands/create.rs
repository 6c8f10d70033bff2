//! `testexec create` - create a Test Execution issue from the CSV export.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::warn;

use crate::cli::args::CreateArgs;
use crate::exit_codes::SUCCESS;

use super::helpers::{format_key_list, open_session, reduce_input};

pub async fn run(args: CreateArgs) -> Result<i32> {
    // 1. Config and session (no request yet)
    let session = open_session(&args.tracker, args.project.as_deref())?;
    let project = session.config().require_project()?.to_string();

    // 2. Reduce the CSV
    let (path, reduced) = reduce_input(&args.input)?;
    let test_keys: Vec<String> = reduced
        .ticket_ids()
        .into_iter()
        .map(|t| t.into_inner())
        .collect();
    if test_keys.is_empty() {
        warn!(path = %path.display(), "no ticket identifiers found in CSV");
        eprintln!("warning: no ticket identifiers found in {}", path.display());
    }

    // 3. Create (or show what would be created)
    if args.dry_run {
        let fields = session.test_execution_fields(&project, &args.summary, &test_keys);
        let body = json!({ "fields": Value::Object(fields) });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(SUCCESS);
    }

    let created = session
        .create_test_execution(&project, &args.summary, &test_keys)
        .await
        .with_context(|| format!("failed to create Test Execution in {}", project))?;

    println!(
        "Created Test Execution: {} with {} tests. Tests added: {}",
        created.key,
        test_keys.len(),
        format_key_list(&test_keys)
    );
    Ok(SUCCESS)
}
