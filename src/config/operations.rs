//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{AgentScanError, Result};
use crate::scan::namespace;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(AgentScanError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AgentScanError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for a command run.
    ///
    /// An explicit path must exist. Without one, `agentscan.yaml` in the
    /// working directory is used if present, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            AgentScanError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            AgentScanError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `manifest` must be non-empty
    /// - `default_prefixes` entries must be well-formed namespace prefixes
    /// - `events_log`, when set, must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.manifest.trim().is_empty() {
            return Err(AgentScanError::UserError(
                "config validation failed: manifest must not be empty".to_string(),
            ));
        }

        for prefix in &self.default_prefixes {
            namespace::validate_prefix(prefix).map_err(|e| {
                AgentScanError::UserError(format!(
                    "config validation failed: default_prefixes: {}",
                    e
                ))
            })?;
        }

        if let Some(log) = &self.events_log
            && log.trim().is_empty()
        {
            return Err(AgentScanError::UserError(
                "config validation failed: events_log must not be empty when set.\n\
                 Fix: remove the key to disable the event log."
                    .to_string(),
            ));
        }

        Ok(())
    }
}
