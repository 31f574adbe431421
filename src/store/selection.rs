//! Remembered employee selection.
//!
//! The set of employees ticked for the last schedule run, persisted as a
//! JSON object mapping each name to `true`/`false`. Employees missing from
//! the file count as selected.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Default selection file name, relative to the working directory.
pub const DEFAULT_SELECTION_FILE: &str = "employee_selection.json";

/// Per-employee include/exclude choices.
///
/// # Example
///
/// ```
/// use shift_roster::models::Employee;
/// use shift_roster::store::SelectionState;
///
/// let roster = vec![Employee::new("Alice"), Employee::new("Bob")];
/// let mut state = SelectionState::default();
/// state.set("Bob", false);
///
/// let selected = state.selected_names(&roster);
/// assert!(selected.contains("Alice"));
/// assert!(!selected.contains("Bob"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    choices: BTreeMap<String, bool>,
}

impl SelectionState {
    /// State that selects exactly the roster members named in `chosen`.
    pub fn from_choices(roster: &[Employee], chosen: &HashSet<String>) -> Self {
        Self {
            choices: roster
                .iter()
                .map(|e| (e.name.clone(), chosen.contains(&e.name)))
                .collect(),
        }
    }

    /// Reads the state file; a missing file is an empty state.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(EngineError::RecordIo {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| EngineError::RecordParse {
            path: path.display().to_string(),
            line: e.line(),
            message: e.to_string(),
        })
    }

    /// Writes the state file.
    pub fn save(&self, path: impl AsRef<Path>) -> EngineResult<()> {
        let path = path.as_ref();
        let to_io_error = |message: String| EngineError::RecordIo {
            path: path.display().to_string(),
            message,
        };

        let content = serde_json::to_string(self).map_err(|e| to_io_error(e.to_string()))?;
        fs::write(path, content).map_err(|e| to_io_error(e.to_string()))
    }

    /// Whether `name` is selected; names never recorded are selected.
    pub fn is_selected(&self, name: &str) -> bool {
        self.choices.get(name).copied().unwrap_or(true)
    }

    /// Records a choice.
    pub fn set(&mut self, name: impl Into<String>, selected: bool) {
        self.choices.insert(name.into(), selected);
    }

    /// Names of the selected roster members.
    pub fn selected_names(&self, roster: &[Employee]) -> HashSet<String> {
        roster
            .iter()
            .filter(|e| self.is_selected(&e.name))
            .map(|e| e.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "shift_roster_selection_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    fn roster() -> Vec<Employee> {
        vec![Employee::new("Alice"), Employee::new("Bob"), Employee::new("Carol")]
    }

    #[test]
    fn test_unrecorded_names_default_to_selected() {
        let state = SelectionState::default();
        assert!(state.is_selected("Anyone"));
        assert_eq!(state.selected_names(&roster()).len(), 3);
    }

    #[test]
    fn test_from_choices_marks_everyone() {
        let chosen: HashSet<String> = ["Bob".to_string()].into();
        let state = SelectionState::from_choices(&roster(), &chosen);

        assert!(!state.is_selected("Alice"));
        assert!(state.is_selected("Bob"));
        assert!(!state.is_selected("Carol"));
        assert_eq!(state.selected_names(&roster()), chosen);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut state = SelectionState::default();
        state.set("Alice", true);
        state.set("Bob", false);

        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"Alice":true,"Bob":false}"#
        );
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save_load");
        let mut state = SelectionState::default();
        state.set("Carol", false);

        state.save(&path).unwrap();
        let loaded = SelectionState::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let state = SelectionState::load(temp_path("missing")).unwrap();
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("invalid");
        fs::write(&path, "{not json").unwrap();
        let result = SelectionState::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EngineError::RecordParse { .. })));
    }
}
