//! `.env` loading. Variables already set in the process environment win.

use std::path::Path;

use tracing::{debug, warn};

/// Load `.env` from the executable's directory, then from the working directory.
pub fn load() {
    if let Ok(dir) = testexec_core::discovery::app_dir() {
        load_from(&dir.join(".env"));
    }
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "failed to load .env from working directory"),
    }
}

/// Load one `.env` file if present.
pub fn load_from(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded .env");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load .env");
            false
        }
    }
}
