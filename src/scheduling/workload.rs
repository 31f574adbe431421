//! Workload tracking.
//!
//! Counts the shifts committed to each employee during one generation run
//! and enforces the per-employee cap.

use std::collections::{BTreeMap, HashMap};

/// Per-run shift counter with a cap.
///
/// # Example
///
/// ```
/// use shift_roster::scheduling::WorkloadTracker;
///
/// let mut tracker = WorkloadTracker::new(["Alice"], 2);
/// assert_eq!(tracker.count("Alice"), 0);
///
/// tracker.record("Alice");
/// assert!(tracker.is_under_cap("Alice"));
///
/// tracker.record("Alice");
/// assert!(!tracker.is_under_cap("Alice"));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadTracker {
    cap: u32,
    counts: HashMap<String, u32>,
}

impl WorkloadTracker {
    /// Starts every named employee at zero shifts.
    pub fn new<I, S>(names: I, cap: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cap,
            counts: names.into_iter().map(|n| (n.into(), 0)).collect(),
        }
    }

    /// The configured cap.
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Shifts recorded for `name` so far; 0 for names never seen.
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Records one committed assignment for `name`.
    pub fn record(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Returns true while `name` has fewer shifts than the cap.
    pub fn is_under_cap(&self, name: &str) -> bool {
        self.count(name) < self.cap
    }

    /// Final counts, sorted by name.
    pub fn into_counts(self) -> BTreeMap<String, u32> {
        self.counts.into_iter().collect()
    }
}
