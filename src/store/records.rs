//! Employee record file.
//!
//! Records are stored one JSON object per line. Adding an employee appends
//! a line; updating one rewrites the whole file.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Default record file name, relative to the working directory.
pub const DEFAULT_RECORD_FILE: &str = "employee.json";

/// Checks that a name is present and made only of letters and spaces.
///
/// # Examples
///
/// ```
/// use shift_roster::store::validate_name;
///
/// assert!(validate_name("Mary Jane").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("R2D2").is_err());
/// ```
pub fn validate_name(name: &str) -> EngineResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("name", "Name is required!"));
    }
    if !name.chars().filter(|c| *c != ' ').all(char::is_alphabetic) {
        return Err(invalid("name", "Name should only contain alphabets and spaces."));
    }
    Ok(())
}

/// Checks a record before it is written: a valid name, at least one store
/// and at least one availability token.
pub fn validate_employee(employee: &Employee) -> EngineResult<()> {
    validate_name(&employee.name)?;
    if employee.stores.is_empty() {
        return Err(invalid("stores", "At least one store must be selected."));
    }
    if employee.hours.is_empty() {
        return Err(invalid("hours", "At least one hour must be selected."));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidEmployee {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Newline-delimited JSON file of employee records.
///
/// # Example
///
/// ```no_run
/// use shift_roster::store::EmployeeStore;
///
/// let store = EmployeeStore::new("employee.json");
/// for employee in store.load()? {
///     println!("{}", employee.name);
/// }
/// # Ok::<(), shift_roster::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeStore {
    path: PathBuf,
}

impl EmployeeStore {
    /// Opens a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record in file order.
    ///
    /// A missing file is an empty roster. Blank lines are skipped.
    pub fn load(&self) -> EngineResult<Vec<Employee>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut employees = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let employee =
                serde_json::from_str::<Employee>(line).map_err(|e| EngineError::RecordParse {
                    path: self.path_str(),
                    line: index + 1,
                    message: e.to_string(),
                })?;
            employees.push(employee);
        }

        debug!(path = %self.path_str(), count = employees.len(), "Loaded employee records");
        Ok(employees)
    }

    /// Replaces the file contents with `employees`, one record per line.
    pub fn save(&self, employees: &[Employee]) -> EngineResult<()> {
        let mut content = String::new();
        for employee in employees {
            content.push_str(&self.encode(employee)?);
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }

    /// Returns true if a record with this name exists, ignoring case and
    /// surrounding whitespace.
    pub fn is_duplicate_name(&self, name: &str) -> EngineResult<bool> {
        Ok(self.load()?.iter().any(|e| e.same_name(name)))
    }

    /// Looks up a record by name, ignoring case.
    pub fn find(&self, name: &str) -> EngineResult<Option<Employee>> {
        Ok(self.load()?.into_iter().find(|e| e.same_name(name)))
    }

    /// Validates and appends a new record.
    ///
    /// The name is stored trimmed.
    pub fn add(&self, mut employee: Employee) -> EngineResult<()> {
        validate_employee(&employee)?;
        employee.name = employee.name.trim().to_string();

        if self.is_duplicate_name(&employee.name)? {
            return Err(EngineError::DuplicateEmployee {
                name: employee.name,
            });
        }

        let line = self.encode(&employee)?;
        let needs_separator = self.ends_without_newline()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        if needs_separator {
            writeln!(file).map_err(|e| self.io_error(e))?;
        }
        writeln!(file, "{}", line).map_err(|e| self.io_error(e))?;

        info!(name = %employee.name, "Employee added");
        Ok(())
    }

    /// Validates `employee` and writes it in place of the record named
    /// `original_name`.
    ///
    /// Renaming onto another existing name is rejected.
    pub fn update(&self, original_name: &str, mut employee: Employee) -> EngineResult<()> {
        validate_employee(&employee)?;
        employee.name = employee.name.trim().to_string();

        let mut employees = self.load()?;
        let index = employees
            .iter()
            .position(|e| e.same_name(original_name))
            .ok_or_else(|| EngineError::EmployeeNotFound {
                name: original_name.to_string(),
            })?;

        let conflict = employees
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && e.same_name(&employee.name));
        if conflict {
            return Err(EngineError::DuplicateEmployee {
                name: employee.name,
            });
        }

        info!(from = %original_name, to = %employee.name, "Employee updated");
        employees[index] = employee;
        self.save(&employees)
    }

    /// Values for a collaborator picker: `"None"` followed by every name,
    /// sorted ignoring case.
    pub fn collaborator_options(&self) -> EngineResult<Vec<String>> {
        let mut names: Vec<String> = self.load()?.into_iter().map(|e| e.name).collect();
        names.sort_by_key(|n| n.to_lowercase());

        let mut options = Vec::with_capacity(names.len() + 1);
        options.push("None".to_string());
        options.extend(names);
        Ok(options)
    }

    fn encode(&self, employee: &Employee) -> EngineResult<String> {
        serde_json::to_string(employee).map_err(|e| EngineError::RecordIo {
            path: self.path_str(),
            message: e.to_string(),
        })
    }

    /// True when the file exists, is non-empty and its last byte is not `\n`.
    fn ends_without_newline(&self) -> EngineResult<bool> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes.last().is_some_and(|b| *b != b'\n')),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, error: std::io::Error) -> EngineError {
        EngineError::RecordIo {
            path: self.path_str(),
            message: error.to_string(),
        }
    }
}
