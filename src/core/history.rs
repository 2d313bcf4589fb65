//! Immutable log of state transitions.
//!
//! The log records only transitions that actually changed the active state.
//! Recording returns a new log value rather than mutating in place, keeping
//! the core free of hidden state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::flow::StateName;

/// Record of a single state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state that was active before the transition.
    pub from: StateName,
    /// The state that became active.
    pub to: StateName,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Create a record stamped with the current time.
    pub fn now(from: impl Into<StateName>, to: impl Into<StateName>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of state changes.
///
/// # Example
///
/// ```rust
/// use stateflow::core::{TransitionLog, TransitionRecord};
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord::now("idle", "running"));
/// let log = log.record(TransitionRecord::now("running", "idle"));
///
/// let path: Vec<&str> = log.path();
/// assert_eq!(path, vec!["idle", "running", "idle"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record, returning a new log. The original is unchanged.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The path of states traversed: the first record's `from`, then each
    /// record's `to` in order. Empty when nothing has been recorded.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last recorded transition, or
    /// `None` when the log is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All records in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }
}
