//! Effort accumulation model
//!
//! Effort is recorded per task, per calendar day. A [`Task`] is a named
//! accumulator of day totals; the [`EffortStore`] owns all tasks and is the
//! sole mutation entry point for the ingestion layer.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Errors raised by effort queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EffortError {
    /// The requested task name was never added to the store
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// A ranged operation was requested before any effort was recorded
    #[error("no effort has been recorded yet")]
    NoData,
}

/// A single task: accumulated effort keyed by calendar day
///
/// Tasks are created by the [`EffortStore`] on first effort addition and are
/// only reachable through it. Repeated contributions on the same day sum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    days: BTreeMap<NaiveDate, f64>,
}

impl Task {
    /// Adds effort for the given day, accumulating with any existing value
    pub fn add_effort(&mut self, day: NaiveDate, effort: f64) {
        *self.days.entry(day).or_insert(0.0) += effort;
    }

    /// Returns the accumulated effort for the given day, or 0 if none
    pub fn effort_on(&self, day: NaiveDate) -> f64 {
        self.days.get(&day).copied().unwrap_or(0.0)
    }

    /// Returns the sum of all daily entries
    pub fn total_effort(&self) -> f64 {
        self.days.values().sum()
    }

    /// Returns the earliest day with an entry, or None for an entry-less task
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    /// Returns the latest day with an entry, or None for an entry-less task
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    /// Returns true if no effort has been recorded on this task
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Store of all tasks, keyed by name
///
/// Timestamps passed to [`add_effort`](Self::add_effort) and
/// [`effort_on`](Self::effort_on) are truncated to their calendar day, so two
/// efforts logged at different times of the same day merge into one total.
///
/// Lookup semantics split by access path: the store distinguishes an unknown
/// task ([`EffortError::UnknownTask`]) from a known task with zero effort on
/// a day (plain 0), while [`Task`] itself defaults missing days to 0.
#[derive(Debug, Clone, Default)]
pub struct EffortStore {
    tasks: BTreeMap<String, Task>,
}

impl EffortStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Records effort for a task at the given timestamp
    ///
    /// The task is created if absent. No validation is performed: any name
    /// is accepted and negative effort simply subtracts from the day total.
    pub fn add_effort(&mut self, task_name: impl Into<String>, stamp: NaiveDateTime, effort: f64) {
        self.tasks
            .entry(task_name.into())
            .or_default()
            .add_effort(stamp.date(), effort);
    }

    /// Returns the effort for a task on the day of the given timestamp
    ///
    /// Returns 0 for a known task with no entry that day; errors only when
    /// the task name was never added.
    pub fn effort_on(&self, task_name: &str, stamp: NaiveDateTime) -> Result<f64, EffortError> {
        Ok(self.task(task_name)?.effort_on(stamp.date()))
    }

    /// Returns the total effort over the given tasks, or over all tasks
    ///
    /// An empty name slice sums to 0. Errors if any requested name is
    /// unknown.
    pub fn total_effort(&self, task_names: Option<&[String]>) -> Result<f64, EffortError> {
        match task_names {
            Some(names) => names
                .iter()
                .map(|name| Ok(self.task(name)?.total_effort()))
                .sum(),
            None => Ok(self.tasks.values().map(Task::total_effort).sum()),
        }
    }

    /// Returns the earliest day with any recorded effort
    ///
    /// None for a store without data; a freshly constructed store is a
    /// normal state, not an error.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.tasks.values().filter_map(Task::min_date).min()
    }

    /// Returns the latest day with any recorded effort, or None without data
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.tasks.values().filter_map(Task::max_date).max()
    }

    /// Returns all task names in ascending lexicographic order
    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.keys().map(String::as_str).collect()
    }

    /// Returns true if the store holds no effort data
    pub fn is_empty(&self) -> bool {
        self.tasks.values().all(Task::is_empty)
    }

    /// Looks up a task by name
    pub(crate) fn task(&self, name: &str) -> Result<&Task, EffortError> {
        self.tasks
            .get(name)
            .ok_or_else(|| EffortError::UnknownTask(name.to_string()))
    }
}
