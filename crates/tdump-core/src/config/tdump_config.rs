//! Top-level configuration, loaded from `tdump.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::analysis_config::AnalysisConfig;
use super::log_config::LogConfig;
use super::pool_config::{PoolCapacity, PoolCapacityTable};
use crate::errors::ConfigError;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TdumpConfig {
    pub analysis: AnalysisConfig,
    pub pools: PoolCapacityTable,
    pub logging: LogConfig,
}

impl TdumpConfig {
    /// Parse and validate a TOML document. Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), pools = config.pools.len(), "loaded config");
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<serialize>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.max_stack_depth == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.max_stack_depth".to_string(),
                message: "must be positive".to_string(),
            });
        }
        for (key, capacity) in &self.pools {
            capacity
                .check()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: format!("pools.{key}"),
                    message,
                })?;
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "logging.level".to_string(),
                message: format!("unknown level '{}'", self.logging.level),
            });
        }
        Ok(())
    }

    /// Configured capacity for a pool key, if any.
    pub fn pool_capacity(&self, key: &str) -> Option<PoolCapacity> {
        self.pools.get(key).copied()
    }
}
