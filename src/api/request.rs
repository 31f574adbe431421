//! Request types for the shift roster API.
//!
//! This module defines the JSON request body shared by the `/schedule` and
//! `/schedule/grid` endpoints, and the employee body used by `/employees`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Request body for schedule generation.
///
/// Contains an optional roster, an optional selection narrowing it and an
/// optional seed making the random selection reproducible. Without
/// `employees` the stored roster and remembered selection are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The employee roster; the stored roster when omitted.
    #[serde(default)]
    pub employees: Option<Vec<EmployeeRequest>>,
    /// Names to include. When omitted, every posted employee, or the
    /// remembered selection for the stored roster.
    #[serde(default)]
    pub selected: Option<Vec<String>>,
    /// Seed for the slot sampler; fresh entropy when omitted.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Employee information in a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Display name.
    pub name: String,
    /// Stores the employee may work at.
    #[serde(default)]
    pub stores: Vec<String>,
    /// Availability tokens such as `"AM MON"`.
    #[serde(default)]
    pub hours: Vec<String>,
    /// Preferred collaborator.
    #[serde(default)]
    pub collab: Option<String>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            name: req.name,
            stores: req.stores,
            hours: req.hours,
            collab: req.collab,
        }
    }
}

impl From<Employee> for EmployeeRequest {
    fn from(employee: Employee) -> Self {
        EmployeeRequest {
            name: employee.name,
            stores: employee.stores,
            hours: employee.hours,
            collab: employee.collab,
        }
    }
}

impl ScheduleRequest {
    /// Splits the request into the posted roster and the explicit selection.
    ///
    /// A posted roster without a selection selects every posted employee.
    pub fn into_parts(self) -> (Option<Vec<Employee>>, Option<HashSet<String>>) {
        let roster: Option<Vec<Employee>> = self
            .employees
            .map(|employees| employees.into_iter().map(Into::into).collect());
        let selected = match (self.selected, &roster) {
            (Some(names), _) => Some(names.into_iter().collect()),
            (None, Some(roster)) => Some(roster.iter().map(|e| e.name.clone()).collect()),
            (None, None) => None,
        };
        (roster, selected)
    }
}
