//! Timestamped preference history
//!
//! The history is an append-only log of preference statements. Entries are only ever
//! removed from the front (oldest first), so iteration ids stay strictly increasing
//! along the log and removing an entry never reorders the rest.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::statement::PreferenceStatement;
use crate::error::ModelError;

/// A recorded statement with the iteration it was elicited in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The judgment itself
    pub statement: PreferenceStatement,
    /// Monotonically increasing elicitation counter
    pub iteration: usize,
    /// Wall-clock time of recording
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of preference statements
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    next_iteration: usize,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement stamped with the current time
    pub fn record(&mut self, statement: PreferenceStatement) -> Result<&HistoryEntry, ModelError> {
        self.record_at(statement, Utc::now())
    }

    /// Append a statement with an explicit timestamp
    ///
    /// Fails if the two alternatives of the statement are described on a different
    /// number of criteria.
    pub fn record_at(
        &mut self,
        statement: PreferenceStatement,
        timestamp: DateTime<Utc>,
    ) -> Result<&HistoryEntry, ModelError> {
        statement.check_dimension(statement.first().dimension())?;

        let iteration = self.next_iteration;
        self.next_iteration += 1;
        self.entries.push_back(HistoryEntry {
            statement,
            iteration,
            timestamp,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Owned copy of the statements, oldest first
    ///
    /// Constructors work on this copy so later appends never leak into a running call.
    pub fn snapshot(&self) -> Vec<PreferenceStatement> {
        self.entries.iter().map(|e| e.statement.clone()).collect()
    }

    /// Remove and return the entry with the smallest iteration
    pub fn remove_oldest(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_front()
    }

    /// The entry with the smallest iteration
    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// The most recently recorded entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterate over the entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Owned copy of all entries, oldest first
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteration id the next recorded statement will get
    pub fn next_iteration(&self) -> usize {
        self.next_iteration
    }
}
