//! Shift assignment for the shift roster generator.
//!
//! This module contains the availability model, the per-employee workload
//! tracker, the pluggable slot sampling strategies and the engine that
//! combines them into a [`Schedule`](crate::models::Schedule).

mod availability;
mod engine;
mod sampler;
mod workload;

pub use availability::{AvailabilityModel, EmployeeAvailability, is_eligible};
pub use engine::ScheduleEngine;
pub use sampler::{InOrderSampler, RandomSampler, SlotSampler};
pub use workload::WorkloadTracker;
