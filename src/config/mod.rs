//! Configuration loading and management for the shift roster generator.
//!
//! This module loads the schedule layout (stores, days, shift periods) and
//! the workload limits from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/scheduler.yaml").unwrap();
//! println!("Stores: {:?}", config.config().stores);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_MAX_EMPLOYEES_PER_SLOT, DEFAULT_MAX_SHIFTS_PER_EMPLOYEE, SchedulerConfig};
