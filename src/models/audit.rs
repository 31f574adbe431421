//! Audit trace models.
//!
//! Every schedule carries an [`AuditTrace`] recording how each slot was
//! filled, so a manager can see why an employee did or did not get a shift.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a scheduling decision.
///
/// # Example
///
/// ```
/// use shift_roster::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "slot_assignment".to_string(),
///     rule_name: "Slot Assignment".to_string(),
///     input: serde_json::json!({"slot": "MON AM @ Downtown", "pool": ["Alice"]}),
///     output: serde_json::json!({"assigned": ["Alice"]}),
///     reasoning: "1 eligible employee, 1 assigned".to_string(),
/// };
/// assert_eq!(step.rule_id, "slot_assignment");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during schedule generation.
///
/// Warnings never stop a run; they flag data a manager may want to fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of scheduling steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total generation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the warnings carrying the given code.
    pub fn warnings_with_code<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a AuditWarning> {
        self.warnings.iter().filter(move |w| w.code == code)
    }
}
