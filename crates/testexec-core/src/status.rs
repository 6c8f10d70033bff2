//! Execution status and its severity ranking.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity used to pick the worst status for a ticket.
///
/// Variant order is the ranking: later variants are more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Empty or unrecognised status.
    Unknown,
    Passed,
    Failed,
}

impl Severity {
    pub fn of(status: &str) -> Self {
        match status {
            "failed" => Self::Failed,
            "passed" => Self::Passed,
            _ => Self::Unknown,
        }
    }
}

/// Normalised status text (trimmed, lower-cased).
///
/// Unknown values are kept verbatim so they can be reported back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(String);

impl Status {
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn severity(&self) -> Severity {
        Severity::of(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
