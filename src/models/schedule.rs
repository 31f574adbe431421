//! Schedule result model.
//!
//! This module contains the [`Schedule`] type returned by the scheduling
//! engine: the employees assigned to every (day, shift, store) slot, the
//! axes the slots were enumerated over, final shift counts and the audit
//! trace of the run.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc, Weekday};
use serde::Serialize;
use uuid::Uuid;

use super::{AuditTrace, ShiftPeriod, Slot};

/// The employees committed to one slot, in selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotAssignment {
    /// The slot being staffed.
    #[serde(flatten)]
    pub slot: Slot,
    /// Names of the assigned employees.
    pub employees: Vec<String>,
}

/// A completed roster.
///
/// A `Schedule` is immutable once the engine returns it. Rendering code
/// walks [`days`](Schedule::days), [`shifts`](Schedule::shifts) and
/// [`stores`](Schedule::stores) and asks [`get`](Schedule::get) for each
/// cell.
///
/// Assignments serialize as an ordered list in enumeration order (day,
/// then shift, then store).
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    schedule_id: Uuid,
    generated_at: DateTime<Utc>,
    days: Vec<Weekday>,
    shifts: Vec<ShiftPeriod>,
    stores: Vec<String>,
    assignments: Vec<SlotAssignment>,
    workload: BTreeMap<String, u32>,
    audit_trace: AuditTrace,
    #[serde(skip)]
    index: HashMap<Slot, usize>,
}

impl Schedule {
    /// Assembles a schedule from the pieces produced by a generation run.
    ///
    /// `assignments` must hold one entry per slot of the axes' cartesian
    /// product, in enumeration order.
    pub(crate) fn new(
        days: Vec<Weekday>,
        shifts: Vec<ShiftPeriod>,
        stores: Vec<String>,
        assignments: Vec<SlotAssignment>,
        workload: BTreeMap<String, u32>,
        audit_trace: AuditTrace,
    ) -> Self {
        let index = assignments
            .iter()
            .enumerate()
            .map(|(i, a)| (a.slot.clone(), i))
            .collect();

        Self {
            schedule_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            days,
            shifts,
            stores,
            assignments,
            workload,
            audit_trace,
            index,
        }
    }

    /// Unique identifier of this run.
    pub fn schedule_id(&self) -> Uuid {
        self.schedule_id
    }

    /// When the schedule was generated.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Employees assigned to a slot; empty when nobody was assigned or the
    /// slot is not part of this schedule.
    pub fn get(&self, day: Weekday, shift: ShiftPeriod, store: &str) -> &[String] {
        self.index
            .get(&Slot::new(day, shift, store))
            .map(|&i| self.assignments[i].employees.as_slice())
            .unwrap_or(&[])
    }

    /// The day axis, in enumeration order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// The shift axis, in enumeration order.
    pub fn shifts(&self) -> &[ShiftPeriod] {
        &self.shifts
    }

    /// The store axis, in enumeration order.
    pub fn stores(&self) -> &[String] {
        &self.stores
    }

    /// Every slot in enumeration order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.assignments.iter().map(|a| &a.slot)
    }

    /// Every slot together with its employees.
    pub fn assignments(&self) -> &[SlotAssignment] {
        &self.assignments
    }

    /// Final shift count of every selected employee.
    pub fn workload(&self) -> &BTreeMap<String, u32> {
        &self.workload
    }

    /// Number of shifts `name` received (0 for unknown names).
    pub fn shift_count(&self, name: &str) -> u32 {
        self.workload.get(name).copied().unwrap_or(0)
    }

    /// Slots `name` was assigned to, in enumeration order.
    pub fn slots_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Slot> {
        self.assignments
            .iter()
            .filter(move |a| a.employees.iter().any(|e| e == name))
            .map(|a| &a.slot)
    }

    /// Audit trace of the run.
    pub fn audit_trace(&self) -> &AuditTrace {
        &self.audit_trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let days = vec![Weekday::Mon];
        let shifts = vec![ShiftPeriod::Am, ShiftPeriod::Pm];
        let stores = vec!["Downtown".to_string()];
        let assignments = vec![
            SlotAssignment {
                slot: Slot::new(Weekday::Mon, ShiftPeriod::Am, "Downtown"),
                employees: vec!["Alice".to_string(), "Bob".to_string()],
            },
            SlotAssignment {
                slot: Slot::new(Weekday::Mon, ShiftPeriod::Pm, "Downtown"),
                employees: vec![],
            },
        ];
        let workload = BTreeMap::from([("Alice".to_string(), 1), ("Bob".to_string(), 1)]);

        Schedule::new(days, shifts, stores, assignments, workload, AuditTrace::default())
    }

    #[test]
    fn test_get_returns_assigned_employees() {
        let schedule = sample_schedule();
        assert_eq!(
            schedule.get(Weekday::Mon, ShiftPeriod::Am, "Downtown"),
            ["Alice".to_string(), "Bob".to_string()]
        );
    }

    #[test]
    fn test_get_unassigned_or_unknown_slot_is_empty() {
        let schedule = sample_schedule();
        assert!(schedule.get(Weekday::Mon, ShiftPeriod::Pm, "Downtown").is_empty());
        assert!(schedule.get(Weekday::Tue, ShiftPeriod::Am, "Downtown").is_empty());
        assert!(schedule.get(Weekday::Mon, ShiftPeriod::Am, "Airport").is_empty());
    }

    #[test]
    fn test_shift_count_and_slots_for() {
        let schedule = sample_schedule();
        assert_eq!(schedule.shift_count("Alice"), 1);
        assert_eq!(schedule.shift_count("Nobody"), 0);

        let slots: Vec<&Slot> = schedule.slots_for("Bob").collect();
        assert_eq!(slots, vec![&Slot::new(Weekday::Mon, ShiftPeriod::Am, "Downtown")]);
    }

    #[test]
    fn test_serializes_assignments_as_ordered_list() {
        let schedule = sample_schedule();
        let json = serde_json::to_value(&schedule).unwrap();

        let assignments = json["assignments"].as_array().unwrap();
        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0]["day"], "Mon");
        assert_eq!(assignments[0]["shift"], "AM");
        assert_eq!(assignments[0]["store"], "Downtown");
        assert_eq!(assignments[0]["employees"][1], "Bob");
        assert_eq!(json["workload"]["Alice"], 1);
        assert!(json.get("index").is_none());
    }
}
