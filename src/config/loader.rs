//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the scheduler
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::SchedulerConfig;

/// Loads and provides access to the scheduler configuration.
///
/// # File Format
///
/// ```text
/// stores: [Downtown, Riverside, Airport]
/// days: [Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday]
/// shifts: [AM, PM]
/// max_shifts_per_employee: 5
/// max_employees_per_slot: 3
/// ```
///
/// Only `stores` is required.
///
/// # Example
///
/// ```no_run
/// use shift_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/scheduler.yaml")?;
/// println!("Scheduling {} stores", loader.config().stores.len());
/// # Ok::<(), shift_roster::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SchedulerConfig,
}

impl ConfigLoader {
    /// Loads and validates configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses `stores` (`ConfigParseError`)
    /// - The axes fail validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: SchedulerConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, stores = config.stores.len(), "Loaded scheduler configuration");
        Self::from_config(config)
    }

    /// Wraps an in-memory configuration after validating it.
    pub fn from_config(config: SchedulerConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> SchedulerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/scheduler.yaml"
    }

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "shift_roster_loader_{}_{}.yaml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.stores, vec!["Downtown", "Riverside", "Airport"]);
        assert_eq!(config.days.len(), 7);
        assert_eq!(config.max_shifts_per_employee, 5);
        assert_eq!(config.max_employees_per_slot, 3);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/scheduler.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("scheduler.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = temp_file("invalid", "stores: [Downtown\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_load_empty_store_list_fails_validation() {
        let path = temp_file("empty_stores", "stores: []\n");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => assert_eq!(field, "stores"),
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_validates() {
        let config = SchedulerConfig::new(["A", "A"]);
        assert!(ConfigLoader::from_config(config).is_err());
    }
}
