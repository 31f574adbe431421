//! Persistence for employee records and the remembered selection.
//!
//! Neither file is read by the scheduler itself; callers load a roster and
//! a selection here and hand them to
//! [`ScheduleEngine`](crate::scheduling::ScheduleEngine).

mod records;
mod selection;

pub use records::{DEFAULT_RECORD_FILE, EmployeeStore, validate_employee, validate_name};
pub use selection::{DEFAULT_SELECTION_FILE, SelectionState};
