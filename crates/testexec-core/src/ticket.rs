//! Ticket identifiers (`PROJ-123`) embedded in free-text test case names.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Uppercase project key, dash, issue number; delimited by word boundaries.
    static ref TICKET_PATTERN: Regex = Regex::new(r"\b[A-Z]+-[0-9]+\b").unwrap();
}

/// Key of a work item in the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Project part of the key (`PROJ` for `PROJ-123`).
    pub fn project(&self) -> &str {
        self.0.split_once('-').map(|(p, _)| p).unwrap_or(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Find the first ticket identifier in a test case name.
pub fn extract_ticket_id(test_case: &str) -> Option<TicketId> {
    if test_case.is_empty() {
        return None;
    }
    TICKET_PATTERN
        .find(test_case)
        .map(|m| TicketId(m.as_str().to_string()))
}
