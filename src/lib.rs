//! Shift roster generator.
//!
//! This crate assigns a roster of employees to AM/PM shifts across several
//! stores for one week, honouring each employee's declared availability,
//! the stores they work at, a per-employee shift cap and a per-slot
//! staffing limit.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod scheduling;
pub mod store;
