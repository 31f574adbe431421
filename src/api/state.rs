//! Application state for the shift roster API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::{ConfigLoader, SchedulerConfig};
use crate::scheduling::ScheduleEngine;
use crate::store::{DEFAULT_RECORD_FILE, DEFAULT_SELECTION_FILE, EmployeeStore};

/// Shared application state.
///
/// Holds the schedule engine built from the loaded configuration and the
/// files backing the stored roster and selection. The engine is immutable;
/// each request builds its own per-run state. File access goes through
/// [`storage_lock`](AppState::storage_lock) so concurrent requests never
/// interleave writes.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<ScheduleEngine>,
    records: EmployeeStore,
    selection_path: PathBuf,
    storage_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    ///
    /// The roster and selection live in [`DEFAULT_RECORD_FILE`] and
    /// [`DEFAULT_SELECTION_FILE`] in the working directory.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            engine: Arc::new(ScheduleEngine::new(config.into_config())),
            records: EmployeeStore::new(DEFAULT_RECORD_FILE),
            selection_path: PathBuf::from(DEFAULT_SELECTION_FILE),
            storage_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Points the state at other record and selection files.
    pub fn with_storage(
        mut self,
        records: EmployeeStore,
        selection_path: impl Into<PathBuf>,
    ) -> Self {
        self.records = records;
        self.selection_path = selection_path.into();
        self
    }

    /// Returns the schedule engine.
    pub fn engine(&self) -> &ScheduleEngine {
        &self.engine
    }

    /// Returns the scheduler configuration.
    pub fn config(&self) -> &SchedulerConfig {
        self.engine.config()
    }

    /// The employee record store.
    pub fn records(&self) -> &EmployeeStore {
        &self.records
    }

    /// The remembered-selection file.
    pub fn selection_path(&self) -> &Path {
        &self.selection_path
    }

    /// Serialises access to the record and selection files.
    pub fn storage_lock(&self) -> &Mutex<()> {
        &self.storage_lock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> ConfigLoader {
        ConfigLoader::from_config(SchedulerConfig::new(["Downtown"])).unwrap()
    }

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_config() {
        let state = AppState::new(loader());
        assert_eq!(state.config().stores, vec!["Downtown"]);
    }

    #[test]
    fn test_default_storage_paths() {
        let state = AppState::new(loader());
        assert_eq!(state.records().path(), Path::new(DEFAULT_RECORD_FILE));
        assert_eq!(state.selection_path(), Path::new(DEFAULT_SELECTION_FILE));
    }

    #[test]
    fn test_with_storage_overrides_paths() {
        let state = AppState::new(loader())
            .with_storage(EmployeeStore::new("/tmp/staff.json"), "/tmp/ticked.json");
        assert_eq!(state.records().path(), Path::new("/tmp/staff.json"));
        assert_eq!(state.selection_path(), Path::new("/tmp/ticked.json"));
    }
}
