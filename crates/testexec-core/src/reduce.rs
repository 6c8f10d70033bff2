//! Worst-status reduction over execution rows.
//!
//! Each distinct ticket appears once, in first-seen order. A later row only
//! replaces the stored status when its severity is strictly greater, so equal
//! severities keep the first status recorded.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::status::Status;
use crate::ticket::{extract_ticket_id, TicketId};

/// One test-case execution: free-text name plus raw status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionRow<'a> {
    pub test_case: &'a str,
    pub status: &'a str,
}

impl<'a> ExecutionRow<'a> {
    pub fn new(test_case: &'a str, status: &'a str) -> Self {
        Self { test_case, status }
    }
}

impl<'a> From<(&'a str, &'a str)> for ExecutionRow<'a> {
    fn from((test_case, status): (&'a str, &'a str)) -> Self {
        Self { test_case, status }
    }
}

/// A ticket and the worst status seen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReducedEntry {
    pub ticket: TicketId,
    pub status: Status,
}

/// Ordered ticket → worst status mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReducedResult {
    entries: Vec<ReducedEntry>,
}

impl ReducedResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TicketId, &Status)> {
        self.entries.iter().map(|e| (&e.ticket, &e.status))
    }

    pub fn entries(&self) -> &[ReducedEntry] {
        &self.entries
    }

    pub fn get(&self, ticket: &str) -> Option<&Status> {
        self.entries
            .iter()
            .find(|e| e.ticket.as_str() == ticket)
            .map(|e| &e.status)
    }

    /// Ticket identifiers in first-seen order, ready for submission.
    pub fn ticket_ids(&self) -> Vec<TicketId> {
        self.entries.iter().map(|e| e.ticket.clone()).collect()
    }

    pub fn into_pairs(self) -> Vec<(TicketId, Status)> {
        self.entries
            .into_iter()
            .map(|e| (e.ticket, e.status))
            .collect()
    }
}

/// Incremental reducer; feed rows with [`Reducer::push`], then [`Reducer::finish`].
#[derive(Debug, Default)]
pub struct Reducer {
    entries: Vec<ReducedEntry>,
    index: HashMap<TicketId, usize>,
    skipped: usize,
}

impl Reducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ExecutionRow<'_>) {
        let Some(ticket) = extract_ticket_id(row.test_case) else {
            debug!(test_case = row.test_case, "no ticket identifier, skipping row");
            self.skipped += 1;
            return;
        };
        let status = Status::normalize(row.status);

        let existing = self.index.get(&ticket).copied();
        match existing {
            None => {
                self.index.insert(ticket.clone(), self.entries.len());
                self.entries.push(ReducedEntry { ticket, status });
            }
            Some(pos) => {
                let stored = &mut self.entries[pos];
                if status.severity() > stored.status.severity() {
                    debug!(
                        ticket = %ticket,
                        from = %stored.status,
                        to = %status,
                        "worse status observed"
                    );
                    stored.status = status;
                }
            }
        }
    }

    /// Rows dropped so far for lacking a ticket identifier.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> ReducedResult {
        ReducedResult {
            entries: self.entries,
        }
    }
}

/// Reduce a whole sequence of rows.
pub fn reduce_rows<'a, I, R>(rows: I) -> ReducedResult
where
    I: IntoIterator<Item = R>,
    R: Into<ExecutionRow<'a>>,
{
    let mut reducer = Reducer::new();
    for row in rows {
        reducer.push(row.into());
    }
    reducer.finish()
}
