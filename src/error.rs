//! Error types for the shift roster generator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the scheduler, its configuration and the
//! employee record store can report.

use thiserror::Error;

/// The main error type for the shift roster generator.
///
/// Malformed availability data is not an error: an employee whose hours
/// or stores cannot be understood is simply eligible for nothing.
///
/// # Example
///
/// ```
/// use shift_roster::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scheduler.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scheduler.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The selected roster contained no employees.
    #[error("No employees selected to generate a schedule")]
    EmptyRoster,

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes an unusable schedule layout.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An employee with the same name (ignoring case) already exists.
    #[error("Employee name already exists: {name}")]
    DuplicateEmployee {
        /// The conflicting name.
        name: String,
    },

    /// No employee record carries the requested name.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A record or selection file could not be read or written.
    #[error("Failed to access '{path}': {message}")]
    RecordIo {
        /// The file being accessed.
        path: String,
        /// The underlying I/O error.
        message: String,
    },

    /// A line of the employee record file is not a valid record.
    #[error("Invalid record in '{path}' at line {line}: {message}")]
    RecordParse {
        /// The record file.
        path: String,
        /// 1-based line number.
        line: usize,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_message() {
        assert_eq!(
            EngineError::EmptyRoster.to_string(),
            "No employees selected to generate a schedule"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/scheduler.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/scheduler.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "stores".to_string(),
            message: "at least one store is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'stores': at least one store is required"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "name".to_string(),
            message: "Name is required!".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'name': Name is required!"
        );
    }

    #[test]
    fn test_duplicate_employee_displays_name() {
        let error = EngineError::DuplicateEmployee {
            name: "Alice".to_string(),
        };
        assert_eq!(error.to_string(), "Employee name already exists: Alice");
    }

    #[test]
    fn test_record_parse_displays_line() {
        let error = EngineError::RecordParse {
            path: "employee.json".to_string(),
            line: 3,
            message: "expected value".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid record in 'employee.json' at line 3: expected value"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty_roster() -> EngineResult<()> {
            Err(EngineError::EmptyRoster)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_empty_roster()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(EngineError::EmptyRoster)));
    }
}
