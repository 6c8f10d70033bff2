use std::path::PathBuf;

use anyhow::Context;
use testexec_core::{discovery, ingest, ReducedResult};
use testexec_tracker::{TrackerConfig, TrackerSession};
use tracing::debug;

use crate::cli::args::{InputArgs, TrackerArgs};

/// Tracker config from flags, falling back to the environment per variable.
pub(crate) fn load_config(
    args: &TrackerArgs,
    project: Option<&str>,
) -> anyhow::Result<TrackerConfig> {
    TrackerConfig::from_vars(|key| {
        let flag = match key {
            "SERVER" => args.server.clone(),
            "TOKEN" => args.token.clone(),
            "PROJECT" => project.map(String::from),
            "TESTEXEC_TIMEOUT" => args.timeout.map(|t| t.to_string()),
            _ => None,
        };
        flag.or_else(|| std::env::var(key).ok())
    })
    .context("failed to load tracker configuration")
}

pub(crate) fn open_session(
    args: &TrackerArgs,
    project: Option<&str>,
) -> anyhow::Result<TrackerSession> {
    let config = load_config(args, project)?;
    debug!(server = %config.server, "opening tracker session");
    TrackerSession::open(config).context("failed to open tracker session")
}

/// Explicit `--csv`, else the first `.csv` in `--dir` (or the executable's directory).
pub(crate) fn resolve_csv(input: &InputArgs) -> anyhow::Result<PathBuf> {
    if let Some(path) = &input.csv {
        return Ok(path.clone());
    }
    let dir = match &input.dir {
        Some(dir) => dir.clone(),
        None => discovery::app_dir()?,
    };
    Ok(discovery::find_first_csv(&dir)?)
}

pub(crate) fn reduce_input(input: &InputArgs) -> anyhow::Result<(PathBuf, ReducedResult)> {
    let path = resolve_csv(input)?;
    let reduced = ingest::reduce_csv_file(&path)?;
    Ok((path, reduced))
}

/// `['PROJ-3', 'PROJ-1']`: quoted keys in brackets.
pub(crate) fn format_key_list<T: AsRef<str>>(keys: &[T]) -> String {
    let quoted: Vec<String> = keys.iter().map(|k| format!("'{}'", k.as_ref())).collect();
    format!("[{}]", quoted.join(", "))
}
