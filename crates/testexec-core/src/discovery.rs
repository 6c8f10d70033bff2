//! Locating the CSV export next to the executable.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReduceError, ReduceResult};

/// Directory containing the running executable.
pub fn app_dir() -> ReduceResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ReduceError::io("<current executable>", e))?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// First file whose name ends in `.csv` (any case) in `dir`, by file name.
pub fn find_first_csv(dir: &Path) -> ReduceResult<PathBuf> {
    let entries = std::fs::read_dir(dir).map_err(|e| ReduceError::io(dir, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReduceError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && has_csv_suffix(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();
    debug!(dir = %dir.display(), count = candidates.len(), "csv candidates");

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| ReduceError::NoCsvFound {
            dir: dir.to_path_buf(),
        })
}

fn has_csv_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".csv"))
}
