//! Core data models for the shift roster generator.
//!
//! This module contains the domain models shared by the scheduler, the
//! record store, the renderer and the HTTP API.

mod audit;
mod employee;
mod schedule;
mod slot;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use employee::{Employee, NO_COLLAB};
pub use schedule::{Schedule, SlotAssignment};
pub use slot::{
    ParseAvailabilityError, ShiftPeriod, Slot, WEEK, availability_token, day_code,
    parse_availability_token,
};
