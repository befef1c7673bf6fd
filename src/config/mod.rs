//! Configuration management for the panel
//!
//! This module handles loading, validation, and management of all panel
//! configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{PainelError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Access control configuration
    pub access: AccessConfig,
}

#[allow(dead_code)]
impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PainelError::Config(format!("Failed to read config file: {}", e)))?;

        let access: AccessConfig = serde_yaml::from_str(&content)
            .map_err(|e| PainelError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { access };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let access = AccessConfig::from_env().map_err(PainelError::Config)?;
        let config = Self { access };

        config.validate()?;
        Ok(config)
    }

    /// Get access configuration
    pub fn access(&self) -> &AccessConfig {
        &self.access
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .validate()
            .map_err(|e| PainelError::Config(format!("Access config error: {}", e)))?;

        // Warn about configurations that leave the panel unusable
        crate::config::models::access::warn_degenerate_config(&self.access);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.access)
            .map_err(|e| PainelError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.access)
            .map_err(|e| PainelError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
