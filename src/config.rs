//! Store configuration.
//!
//! Values come from an optional JSON file and are then overridden by
//! command-line flags.

use crate::error::ConfigError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What happens to an assignment record when it is released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnassignMode {
    /// Drop the record from the collection.
    #[default]
    Remove,
    /// Keep the record for history with status `inactive`.
    Deactivate,
}

/// What happens when a record with dependents is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    /// Refuse the deletion.
    #[default]
    Block,
    /// Release assignments and delete child records along with the parent.
    Cascade,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Recorded as `assignedBy` on new assignments.
    pub administrator: String,
    pub unassign_mode: UnassignMode,
    pub delete_policy: DeletePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            administrator: "Administrator".to_string(),
            unassign_mode: UnassignMode::default(),
            delete_policy: DeletePolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Reads a JSON config file. Missing keys fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::FileRead {
            path: path_ref.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path_ref.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "unassignMode": "deactivate" }}"#).unwrap();

        let config = StoreConfig::load(file.path()).unwrap();

        assert_eq!(config.unassign_mode, UnassignMode::Deactivate);
        assert_eq!(config.delete_policy, DeletePolicy::Block);
        assert_eq!(config.administrator, "Administrator");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "deletePolicy": "ignore" }}"#).unwrap();

        let err = StoreConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = StoreConfig::load("/nonexistent/config.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.json"));
    }
}
