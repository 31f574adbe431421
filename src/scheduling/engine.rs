//! Slot assignment engine.
//!
//! Fills every (day, shift, store) slot in one greedy pass. Slots are
//! visited day by day, then shift by shift, then store by store; for each
//! slot the engine collects the selected employees who are eligible and
//! still under their cap, lets the [`SlotSampler`] choose up to
//! `max_employees_per_slot` of them, and commits the choice.
//!
//! The pass makes no attempt at global balance: an employee picked early in
//! the week may reach the cap before later slots are considered.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::SchedulerConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, Employee, Schedule, Slot, SlotAssignment};

use super::availability::{AvailabilityModel, EmployeeAvailability};
use super::sampler::SlotSampler;
use super::workload::WorkloadTracker;

/// Generates schedules for a fixed configuration.
///
/// The engine holds no per-run state; every call to
/// [`generate`](ScheduleEngine::generate) builds its own availability model,
/// workload tracker and result, so one engine may serve concurrent runs.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use chrono::Weekday;
/// use shift_roster::config::SchedulerConfig;
/// use shift_roster::models::{Employee, ShiftPeriod};
/// use shift_roster::scheduling::{RandomSampler, ScheduleEngine};
///
/// let engine = ScheduleEngine::new(SchedulerConfig::new(["StoreX"]));
/// let roster = vec![Employee::new("Alice")
///     .with_store("StoreX")
///     .with_availability(Weekday::Mon, ShiftPeriod::Am)];
/// let selected: HashSet<String> = ["Alice".to_string()].into();
///
/// let schedule = engine
///     .generate(&roster, &selected, &mut RandomSampler::seeded(1))
///     .unwrap();
/// assert_eq!(schedule.get(Weekday::Mon, ShiftPeriod::Am, "StoreX"), ["Alice".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleEngine {
    config: SchedulerConfig,
}

impl ScheduleEngine {
    /// Creates an engine for the given configuration.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine schedules against.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Generates a schedule using every employee in the roster.
    pub fn generate_all<S>(&self, roster: &[Employee], sampler: &mut S) -> EngineResult<Schedule>
    where
        S: SlotSampler + ?Sized,
    {
        let selected: HashSet<String> = roster.iter().map(|e| e.name.clone()).collect();
        self.generate(roster, &selected, sampler)
    }

    /// Generates a schedule for the roster members named in `selected`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyRoster`] before any slot is processed
    /// when no roster member is selected.
    pub fn generate<S>(
        &self,
        roster: &[Employee],
        selected: &HashSet<String>,
        sampler: &mut S,
    ) -> EngineResult<Schedule>
    where
        S: SlotSampler + ?Sized,
    {
        let start_time = Instant::now();

        if !roster.iter().any(|e| selected.contains(&e.name)) {
            warn!(
                roster_size = roster.len(),
                selected = selected.len(),
                "No selected employees in roster"
            );
            return Err(EngineError::EmptyRoster);
        }

        let config = &self.config;
        let model = AvailabilityModel::new(roster, selected, config);
        let mut workload = WorkloadTracker::new(model.names(), config.max_shifts_per_employee);

        let mut steps: Vec<AuditStep> = Vec::with_capacity(config.slot_count() + 1);
        let mut warnings: Vec<AuditWarning> = model.warnings().to_vec();
        let mut step_number: u32 = 1;

        steps.push(AuditStep {
            step_number,
            rule_id: "roster_selection".to_string(),
            rule_name: "Roster Selection".to_string(),
            input: serde_json::json!({
                "roster_size": roster.len(),
                "selected": selected.len(),
            }),
            output: serde_json::json!({
                "employees": model.names().collect::<Vec<_>>(),
            }),
            reasoning: format!(
                "{} of {} roster employees selected for scheduling",
                model.len(),
                roster.len()
            ),
        });
        step_number += 1;

        let mut assignments = Vec::with_capacity(config.slot_count());

        for &day in &config.days {
            for &shift in &config.shifts {
                for store in &config.stores {
                    let slot = Slot::new(day, shift, store.as_str());

                    let pool: Vec<&EmployeeAvailability> = model
                        .employees()
                        .iter()
                        .filter(|e| {
                            e.is_eligible(day, shift, store) && workload.is_under_cap(&e.name)
                        })
                        .collect();
                    let amount = config.max_employees_per_slot.min(pool.len());

                    let picks = sampler.sample(pool.len(), amount);
                    let assigned = commit_sample(&pool, picks, amount);
                    for name in &assigned {
                        workload.record(name);
                    }

                    debug!(
                        slot = %slot,
                        pool = pool.len(),
                        assigned = assigned.len(),
                        "Filled slot"
                    );

                    if assigned.is_empty() {
                        let message = if pool.is_empty() {
                            format!("{} has no eligible employees", slot)
                        } else {
                            format!(
                                "{} left empty: {} eligible, per-slot limit is {}",
                                slot,
                                pool.len(),
                                config.max_employees_per_slot
                            )
                        };
                        warn!(slot = %slot, pool = pool.len(), "{}", message);
                        warnings.push(AuditWarning::new("UNFILLED_SLOT", message, "medium"));
                    }

                    steps.push(slot_step(
                        step_number,
                        &slot,
                        &pool,
                        &assigned,
                        config.max_employees_per_slot,
                    ));
                    step_number += 1;

                    assignments.push(SlotAssignment {
                        slot,
                        employees: assigned,
                    });
                }
            }
        }

        let duration = start_time.elapsed();
        let filled = assignments.iter().filter(|a| !a.employees.is_empty()).count();
        info!(
            employees = model.len(),
            slots = assignments.len(),
            filled_slots = filled,
            warnings = warnings.len(),
            duration_us = duration.as_micros(),
            "Schedule generated"
        );

        Ok(Schedule::new(
            config.days.clone(),
            config.shifts.clone(),
            config.stores.clone(),
            assignments,
            workload.into_counts(),
            AuditTrace {
                steps,
                warnings,
                duration_us: duration.as_micros() as u64,
            },
        ))
    }
}

/// Turns the sampler's picks into names.
///
/// Only the first `amount` distinct in-range indices are honoured, so a
/// misbehaving sampler can never overfill a slot or double-book someone.
fn commit_sample(pool: &[&EmployeeAvailability], picks: Vec<usize>, amount: usize) -> Vec<String> {
    let mut taken = HashSet::with_capacity(amount);
    picks
        .into_iter()
        .filter(|&i| i < pool.len() && taken.insert(i))
        .take(amount)
        .map(|i| pool[i].name.clone())
        .collect()
}

fn slot_step(
    step_number: u32,
    slot: &Slot,
    pool: &[&EmployeeAvailability],
    assigned: &[String],
    max_per_slot: usize,
) -> AuditStep {
    let pool_names: Vec<&str> = pool.iter().map(|e| e.name.as_str()).collect();

    let reasoning = if pool.is_empty() {
        "No selected employee is available, works at this store and is under the shift cap"
            .to_string()
    } else if pool.len() <= max_per_slot {
        format!(
            "{} eligible employee(s) fit within the limit of {}, all assigned",
            pool.len(),
            max_per_slot
        )
    } else {
        format!(
            "{} eligible employees exceed the limit of {}, {} sampled",
            pool.len(),
            max_per_slot,
            assigned.len()
        )
    };

    AuditStep {
        step_number,
        rule_id: "slot_assignment".to_string(),
        rule_name: "Slot Assignment".to_string(),
        input: serde_json::json!({
            "slot": slot.to_string(),
            "eligible_pool": pool_names,
            "max_employees_per_slot": max_per_slot,
        }),
        output: serde_json::json!({
            "assigned": assigned,
        }),
        reasoning,
    }
}
