//! Employee model.
//!
//! This module defines the Employee record exactly as it is persisted by
//! the record store: a display name, the stores the employee may work at,
//! availability tokens and an optional collaborator preference.

use std::collections::HashSet;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::slot::{ShiftPeriod, availability_token, parse_availability_token};

/// Collaborator value stored when the employee has no preference.
pub const NO_COLLAB: &str = "No Collab";

/// Represents an employee who can be placed on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name, unique across the roster ignoring case.
    pub name: String,
    /// Stores the employee may work at.
    #[serde(default)]
    pub stores: Vec<String>,
    /// Availability tokens such as `"AM MON"`.
    #[serde(default)]
    pub hours: Vec<String>,
    /// Preferred collaborator, or [`NO_COLLAB`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collab: Option<String>,
}

impl Employee {
    /// Creates an employee with no stores and no availability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stores: Vec::new(),
            hours: Vec::new(),
            collab: None,
        }
    }

    /// Adds a store.
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.stores.push(store.into());
        self
    }

    /// Declares availability for a day and shift period.
    pub fn with_availability(mut self, day: Weekday, shift: ShiftPeriod) -> Self {
        self.hours.push(availability_token(day, shift));
        self
    }

    /// Sets the collaborator preference.
    pub fn with_collab(mut self, collab: impl Into<String>) -> Self {
        self.collab = Some(collab.into());
        self
    }

    /// Returns the preferred collaborator, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::Employee;
    ///
    /// assert_eq!(Employee::new("Alice").with_collab("Bob").collaborator(), Some("Bob"));
    /// assert_eq!(Employee::new("Alice").with_collab("No Collab").collaborator(), None);
    /// ```
    pub fn collaborator(&self) -> Option<&str> {
        self.collab
            .as_deref()
            .filter(|c| *c != NO_COLLAB && *c != "None")
    }

    /// The (day, shift) pairs this employee declared, ignoring unreadable tokens.
    pub fn availability(&self) -> HashSet<(Weekday, ShiftPeriod)> {
        self.hours
            .iter()
            .filter_map(|token| parse_availability_token(token).ok())
            .collect()
    }

    /// Returns true if the employee listed `store` among their stores.
    pub fn works_at(&self, store: &str) -> bool {
        self.stores.iter().any(|s| s == store)
    }

    /// Case-insensitive, whitespace-trimmed name comparison.
    pub fn same_name(&self, other: &str) -> bool {
        self.name.trim().to_lowercase() == other.trim().to_lowercase()
    }
}
