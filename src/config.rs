//! Gate configuration.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Configuration for the gating overlay.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Fact key the classifier consults.
    pub fact_key: String,
    /// Fact value (compared case-insensitively) that marks a worker as
    /// requiring the bootstrap block.
    pub fact_value: String,
    /// Prerequisite task file, relative to the run's base directory.
    pub bootstrap_path: PathBuf,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            fact_key: "os_family".to_string(),
            fact_value: "windows".to_string(),
            bootstrap_path: PathBuf::from("tasks/bootstrap.yml"),
        }
    }
}

impl GateConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fact_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "fact_key".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.fact_value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "fact_value".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.bootstrap_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "bootstrap_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.bootstrap_path.is_absolute() {
            return Err(ConfigError::InvalidValue {
                key: "bootstrap_path".to_string(),
                message: "must be relative to the run base directory".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GateConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fact_key, "os_family");
        assert_eq!(config.bootstrap_path, PathBuf::from("tasks/bootstrap.yml"));
    }

    #[test]
    fn empty_fact_key_rejected() {
        let config = GateConfig {
            fact_key: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { key, .. }) if key == "fact_key"
        ));
    }

    #[test]
    fn absolute_bootstrap_path_rejected() {
        let config = GateConfig {
            bootstrap_path: PathBuf::from("/etc/tasks/bootstrap.yml"),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { key, .. }) if key == "bootstrap_path"
        ));
    }
}
