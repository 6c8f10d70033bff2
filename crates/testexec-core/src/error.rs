//! Error types for CSV reduction.

use std::path::PathBuf;

/// Reduction errors.
#[derive(Debug, thiserror::Error)]
pub enum ReduceError {
    /// The CSV header lacks one or more required columns.
    #[error(
        "CSV must contain columns: {}\nFound columns: {}",
        quoted(.expected),
        quoted(.found)
    )]
    MissingColumns {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// No `.csv` file in the search directory.
    #[error("no .csv file found in: {}", dir.display())]
    NoCsvFound { dir: PathBuf },

    /// Filesystem failure while locating or reading input.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV record.
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl ReduceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

fn quoted(names: &[String]) -> String {
    let inner: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
    format!("[{}]", inner.join(", "))
}

/// Result type for reduction operations.
pub type ReduceResult<T> = Result<T, ReduceError>;
