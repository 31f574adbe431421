//! Configuration types for schedule generation.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use std::collections::HashSet;
use std::hash::Hash;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftPeriod, WEEK};

/// Default maximum number of shifts one employee may receive per run.
pub const DEFAULT_MAX_SHIFTS_PER_EMPLOYEE: u32 = 5;

/// Default maximum number of employees placed in one slot.
pub const DEFAULT_MAX_EMPLOYEES_PER_SLOT: usize = 3;

fn default_days() -> Vec<Weekday> {
    WEEK.to_vec()
}

fn default_shifts() -> Vec<ShiftPeriod> {
    ShiftPeriod::ALL.to_vec()
}

fn default_max_shifts_per_employee() -> u32 {
    DEFAULT_MAX_SHIFTS_PER_EMPLOYEE
}

fn default_max_employees_per_slot() -> usize {
    DEFAULT_MAX_EMPLOYEES_PER_SLOT
}

/// Layout and limits of one schedule generation run.
///
/// The three axes are enumerated in the order given here: day, then shift,
/// then store. That order decides which employees reach their cap first.
///
/// # Example
///
/// ```
/// use shift_roster::config::SchedulerConfig;
///
/// let config = SchedulerConfig::new(["Downtown", "Airport"]);
/// assert_eq!(config.days.len(), 7);
/// assert_eq!(config.max_shifts_per_employee, 5);
/// assert_eq!(config.max_employees_per_slot, 3);
/// assert_eq!(config.slot_count(), 7 * 2 * 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Store names, in display order.
    pub stores: Vec<String>,
    /// Days to schedule, in display order.
    #[serde(default = "default_days")]
    pub days: Vec<Weekday>,
    /// Shift periods per day, in display order.
    #[serde(default = "default_shifts")]
    pub shifts: Vec<ShiftPeriod>,
    /// Maximum shifts any one employee may receive in a run.
    #[serde(default = "default_max_shifts_per_employee")]
    pub max_shifts_per_employee: u32,
    /// Maximum employees assigned to a single slot.
    #[serde(default = "default_max_employees_per_slot")]
    pub max_employees_per_slot: usize,
}

impl SchedulerConfig {
    /// Creates a configuration with the default week, both shift periods and
    /// the default caps.
    pub fn new<I, S>(stores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stores: stores.into_iter().map(Into::into).collect(),
            days: default_days(),
            shifts: default_shifts(),
            max_shifts_per_employee: DEFAULT_MAX_SHIFTS_PER_EMPLOYEE,
            max_employees_per_slot: DEFAULT_MAX_EMPLOYEES_PER_SLOT,
        }
    }

    /// Sets the per-employee shift cap.
    pub fn with_max_shifts_per_employee(mut self, cap: u32) -> Self {
        self.max_shifts_per_employee = cap;
        self
    }

    /// Sets the per-slot employee cap.
    pub fn with_max_employees_per_slot(mut self, cap: usize) -> Self {
        self.max_employees_per_slot = cap;
        self
    }

    /// Restricts the day axis.
    pub fn with_days(mut self, days: impl Into<Vec<Weekday>>) -> Self {
        self.days = days.into();
        self
    }

    /// Number of slots in one run.
    pub fn slot_count(&self) -> usize {
        self.days.len() * self.shifts.len() * self.stores.len()
    }

    /// Returns true if `store` is one of the configured stores.
    pub fn has_store(&self, store: &str) -> bool {
        self.stores.iter().any(|s| s == store)
    }

    /// Checks that the axes describe a usable schedule.
    ///
    /// Every axis must be non-empty and free of duplicates, and store names
    /// must not be blank. Caps of zero are allowed and simply leave slots
    /// empty.
    pub fn validate(&self) -> EngineResult<()> {
        if self.stores.is_empty() {
            return Err(invalid("stores", "at least one store is required"));
        }
        if self.stores.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("stores", "store names must not be blank"));
        }
        if let Some(dup) = first_duplicate(&self.stores) {
            return Err(invalid("stores", format!("duplicate store '{}'", dup)));
        }

        if self.days.is_empty() {
            return Err(invalid("days", "at least one day is required"));
        }
        if let Some(dup) = first_duplicate(&self.days) {
            return Err(invalid("days", format!("duplicate day '{}'", dup)));
        }

        if self.shifts.is_empty() {
            return Err(invalid("shifts", "at least one shift period is required"));
        }
        if let Some(dup) = first_duplicate(&self.shifts) {
            return Err(invalid("shifts", format!("duplicate shift '{}'", dup)));
        }

        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}

fn first_duplicate<T: Eq + Hash>(items: &[T]) -> Option<&T> {
    let mut seen = HashSet::new();
    items.iter().find(|item| !seen.insert(*item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_with_only_stores_uses_defaults() {
        let config: SchedulerConfig = serde_yaml::from_str("stores: [Downtown]").unwrap();

        assert_eq!(config.stores, vec!["Downtown"]);
        assert_eq!(config.days, WEEK.to_vec());
        assert_eq!(config.shifts, vec![ShiftPeriod::Am, ShiftPeriod::Pm]);
        assert_eq!(config.max_shifts_per_employee, 5);
        assert_eq!(config.max_employees_per_slot, 3);
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = r#"
stores: [Downtown, Airport]
days: [Saturday, Sunday]
shifts: [PM]
max_shifts_per_employee: 2
max_employees_per_slot: 1
"#;
        let config: SchedulerConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.days, vec![Weekday::Sat, Weekday::Sun]);
        assert_eq!(config.shifts, vec![ShiftPeriod::Pm]);
        assert_eq!(config.max_shifts_per_employee, 2);
        assert_eq!(config.max_employees_per_slot, 1);
        assert_eq!(config.slot_count(), 4);
    }

    #[test]
    fn test_yaml_missing_stores_fails() {
        let result: Result<SchedulerConfig, _> = serde_yaml::from_str("max_employees_per_slot: 2");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(SchedulerConfig::new(["Downtown"]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_stores() {
        let config = SchedulerConfig::new(Vec::<String>::new());
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "stores"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_blank_store() {
        let config = SchedulerConfig::new(["Downtown", "  "]);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_store() {
        let config = SchedulerConfig::new(["Downtown", "Downtown"]);
        match config.validate() {
            Err(EngineError::InvalidConfig { message, .. }) => {
                assert!(message.contains("Downtown"))
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_day() {
        let config =
            SchedulerConfig::new(["Downtown"]).with_days(vec![Weekday::Mon, Weekday::Mon]);
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "days"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_shifts() {
        let mut config = SchedulerConfig::new(["Downtown"]);
        config.shifts.clear();
        match config.validate() {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "shifts"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_has_store() {
        let config = SchedulerConfig::new(["Downtown"]);
        assert!(config.has_store("Downtown"));
        assert!(!config.has_store("Airport"));
    }
}
