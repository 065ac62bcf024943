//! Configuration management for unitgraph.
//!
//! This module handles loading the analysis configuration: the relation
//! weight table and the units excluded from root selection. Every field is
//! optional; a missing file section falls back to the built-in defaults.
//!
//! ```yaml
//! weights:
//!   Wants: 5
//!   Conflicts: 500
//! bootstrap-units:
//!   - init.scope
//!   - -.slice
//! ```

use crate::analysis::{BOOTSTRAP_UNIT, WeightTable};
use crate::domain::UnitId;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration file structure for unitgraph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Relation kind → edge weight
    pub weights: WeightTable,

    /// Units never chosen as traversal root
    #[serde(rename = "bootstrap-units")]
    pub bootstrap_units: Vec<UnitId>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weights: WeightTable::default(),
            bootstrap_units: vec![UnitId::from(BOOTSTRAP_UNIT)],
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text. Empty text yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from `path` if given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.weights, WeightTable::default());
        assert_eq!(config.bootstrap_units, vec![UnitId::from("init.scope")]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AnalysisConfig::from_yaml("weights:\n  Wants: 5\n").unwrap();
        assert_eq!(config.weights.wants, 5);
        assert_eq!(config.weights.conflicts, 1000);
        assert_eq!(config.bootstrap_units, vec![UnitId::from("init.scope")]);
    }

    #[test]
    fn test_bootstrap_units_override() {
        let config =
            AnalysisConfig::from_yaml("bootstrap-units:\n  - init.scope\n  - \"-.slice\"\n")
                .unwrap();
        assert_eq!(config.bootstrap_units.len(), 2);
        assert_eq!(config.bootstrap_units[1].as_str(), "-.slice");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AnalysisConfig::from_yaml("  \n").unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = AnalysisConfig::from_yaml("weights: [1, 2").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = AnalysisConfig::from_yaml("weights:\n  Wants: -3\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("unitgraph.yaml");
        let mut config = AnalysisConfig::default();
        config.weights.after = 42;
        std::fs::write(&path, serde_yaml::to_string(&config).unwrap()).unwrap();

        let loaded = AnalysisConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AnalysisConfig::load_or_default(None).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = AnalysisConfig::load(Path::new("/nonexistent/unitgraph.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
