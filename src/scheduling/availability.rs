//! Availability model.
//!
//! Answers "may employee E work slot (day, shift, store)?". An employee is
//! eligible when the store is one of their stores and the (day, shift) pair
//! is one of their declared availability windows. Anything that cannot be
//! read (missing stores, placeholder hours, typos) makes the employee
//! ineligible for the affected slots; it is never an error.

use std::collections::HashSet;

use chrono::Weekday;
use tracing::warn;

use crate::config::SchedulerConfig;
use crate::models::{AuditWarning, Employee, ShiftPeriod, parse_availability_token};

/// Returns true iff `store` is one of the employee's stores and the
/// employee declared availability for `(day, shift)`.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use shift_roster::models::{Employee, ShiftPeriod};
/// use shift_roster::scheduling::is_eligible;
///
/// let alice = Employee::new("Alice")
///     .with_store("StoreX")
///     .with_availability(Weekday::Mon, ShiftPeriod::Am);
///
/// assert!(is_eligible(&alice, Weekday::Mon, ShiftPeriod::Am, "StoreX"));
/// assert!(!is_eligible(&alice, Weekday::Mon, ShiftPeriod::Pm, "StoreX"));
/// assert!(!is_eligible(&alice, Weekday::Mon, ShiftPeriod::Am, "StoreY"));
/// ```
pub fn is_eligible(employee: &Employee, day: Weekday, shift: ShiftPeriod, store: &str) -> bool {
    employee.works_at(store)
        && employee
            .hours
            .iter()
            .any(|token| parse_availability_token(token) == Ok((day, shift)))
}

/// One employee's availability, parsed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeAvailability {
    /// Employee name.
    pub name: String,
    stores: HashSet<String>,
    windows: HashSet<(Weekday, ShiftPeriod)>,
}

impl EmployeeAvailability {
    /// Parses an employee record.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            stores: employee.stores.iter().cloned().collect(),
            windows: employee.availability(),
        }
    }

    /// Same contract as [`is_eligible`], against the pre-parsed sets.
    pub fn is_eligible(&self, day: Weekday, shift: ShiftPeriod, store: &str) -> bool {
        self.stores.contains(store) && self.windows.contains(&(day, shift))
    }

    /// Number of (day, shift) windows declared.
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }
}

/// Availability of every selected employee for one generation run.
///
/// Employees are kept in roster order so the eligible pool of every slot
/// is listed in a stable order.
#[derive(Debug, Clone)]
pub struct AvailabilityModel {
    employees: Vec<EmployeeAvailability>,
    warnings: Vec<AuditWarning>,
}

impl AvailabilityModel {
    /// Builds the model from the roster members whose names are in `selected`.
    ///
    /// Data problems are collected as warnings:
    /// - `MISSING_EMPLOYEE`: a selected name has no roster record
    /// - `DUPLICATE_EMPLOYEE`: a name appears twice; only the first record is used
    /// - `INVALID_AVAILABILITY`: an hours token could not be read
    /// - `UNKNOWN_STORE`: an employee lists a store that is not configured
    /// - `NO_AVAILABILITY`: an employee can never be eligible
    pub fn new(roster: &[Employee], selected: &HashSet<String>, config: &SchedulerConfig) -> Self {
        let mut employees = Vec::new();
        let mut warnings = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for employee in roster.iter().filter(|e| selected.contains(&e.name)) {
            if !seen.insert(employee.name.as_str()) {
                warnings.push(AuditWarning::new(
                    "DUPLICATE_EMPLOYEE",
                    format!("'{}' appears more than once; later records ignored", employee.name),
                    "high",
                ));
                continue;
            }

            for token in &employee.hours {
                if parse_availability_token(token).is_err() {
                    warnings.push(AuditWarning::new(
                        "INVALID_AVAILABILITY",
                        format!("'{}' has unreadable availability '{}'", employee.name, token),
                        "low",
                    ));
                }
            }
            for store in &employee.stores {
                if !config.has_store(store) {
                    warnings.push(AuditWarning::new(
                        "UNKNOWN_STORE",
                        format!(
                            "'{}' lists store '{}' which is not scheduled",
                            employee.name, store
                        ),
                        "low",
                    ));
                }
            }

            let availability = EmployeeAvailability::from_employee(employee);
            let schedulable = config.stores.iter().any(|s| availability.stores.contains(s))
                && availability.window_count() > 0;
            if !schedulable {
                warnings.push(AuditWarning::new(
                    "NO_AVAILABILITY",
                    format!("'{}' is not available for any slot", employee.name),
                    "medium",
                ));
            }
            employees.push(availability);
        }

        let mut missing: Vec<&String> = selected
            .iter()
            .filter(|name| !seen.contains(name.as_str()))
            .collect();
        missing.sort();
        for name in missing {
            warnings.push(AuditWarning::new(
                "MISSING_EMPLOYEE",
                format!("selected employee '{}' has no record", name),
                "medium",
            ));
        }

        for warning in &warnings {
            warn!(code = %warning.code, "{}", warning.message);
        }

        Self { employees, warnings }
    }

    /// Selected employees, in roster order.
    pub fn employees(&self) -> &[EmployeeAvailability] {
        &self.employees
    }

    /// Employee names, in roster order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.employees.iter().map(|e| e.name.as_str())
    }

    /// Number of selected employees found in the roster.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no selected employee was found in the roster.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Data problems found while building the model.
    pub fn warnings(&self) -> &[AuditWarning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Employee {
        Employee::new("Alice")
            .with_store("StoreX")
            .with_availability(Weekday::Mon, ShiftPeriod::Am)
    }

    fn selected(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_is_eligible_requires_store_and_window() {
        let employee = alice();
        assert!(is_eligible(&employee, Weekday::Mon, ShiftPeriod::Am, "StoreX"));
        assert!(!is_eligible(&employee, Weekday::Tue, ShiftPeriod::Am, "StoreX"));
        assert!(!is_eligible(&employee, Weekday::Mon, ShiftPeriod::Am, "StoreY"));
    }

    #[test]
    fn test_is_eligible_is_pure() {
        let employee = alice();
        let first = is_eligible(&employee, Weekday::Mon, ShiftPeriod::Am, "StoreX");
        let second = is_eligible(&employee, Weekday::Mon, ShiftPeriod::Am, "StoreX");
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_data_is_never_eligible() {
        let employee: Employee = serde_json::from_str(r#"{"name": "Ghost"}"#).unwrap();
        for day in crate::models::WEEK {
            for shift in ShiftPeriod::ALL {
                assert!(!is_eligible(&employee, day, shift, "StoreX"));
            }
        }
    }

    #[test]
    fn test_placeholder_values_are_ineligible() {
        let employee: Employee = serde_json::from_str(
            r#"{"name": "Eve", "stores": ["No store selected"], "hours": ["No hours selected"]}"#,
        )
        .unwrap();
        assert!(!is_eligible(&employee, Weekday::Mon, ShiftPeriod::Am, "No store selected"));
    }

    #[test]
    fn test_parsed_availability_matches_free_function() {
        let employee = alice()
            .with_store("StoreY")
            .with_availability(Weekday::Sun, ShiftPeriod::Pm);
        let parsed = EmployeeAvailability::from_employee(&employee);

        for day in crate::models::WEEK {
            for shift in ShiftPeriod::ALL {
                for store in ["StoreX", "StoreY", "StoreZ"] {
                    assert_eq!(
                        parsed.is_eligible(day, shift, store),
                        is_eligible(&employee, day, shift, store)
                    );
                }
            }
        }
    }

    #[test]
    fn test_model_keeps_only_selected_in_roster_order() {
        let roster = vec![
            Employee::new("Zed").with_store("StoreX"),
            alice(),
            Employee::new("Bob").with_store("StoreX"),
        ];
        let config = SchedulerConfig::new(["StoreX"]);
        let model = AvailabilityModel::new(&roster, &selected(&["Alice", "Zed"]), &config);

        let names: Vec<&str> = model.names().collect();
        assert_eq!(names, vec!["Zed", "Alice"]);
    }

    #[test]
    fn test_model_warns_about_data_problems() {
        let mut broken = Employee::new("Carol").with_store("Mars");
        broken.hours.push("whenever".to_string());
        let roster = vec![alice(), alice(), broken];
        let config = SchedulerConfig::new(["StoreX"]);

        let chosen = selected(&["Alice", "Carol", "Dana"]);
        let model = AvailabilityModel::new(&roster, &chosen, &config);
        let codes: Vec<&str> = model.warnings().iter().map(|w| w.code.as_str()).collect();

        assert_eq!(model.len(), 2);
        assert!(codes.contains(&"DUPLICATE_EMPLOYEE"));
        assert!(codes.contains(&"INVALID_AVAILABILITY"));
        assert!(codes.contains(&"UNKNOWN_STORE"));
        assert!(codes.contains(&"NO_AVAILABILITY"));
        assert!(codes.contains(&"MISSING_EMPLOYEE"));
    }

    #[test]
    fn test_model_empty_when_nothing_selected() {
        let config = SchedulerConfig::new(["StoreX"]);
        let model = AvailabilityModel::new(&[alice()], &HashSet::new(), &config);
        assert!(model.is_empty());
    }
}
