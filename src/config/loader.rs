//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the carrier
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::CarrierConfig;

/// Loads and provides access to the carrier configuration.
///
/// The `ConfigLoader` reads the carrier's YAML configuration from a
/// directory and exposes the typed [`CarrierConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/own_transport/
/// ├── carrier.yaml     # Carrier flags, titles, condition, handling fee
/// └── tablerates.csv   # Rate matrix (loaded by lookup::InMemoryTableRate)
/// ```
///
/// # Example
///
/// ```no_run
/// use tablerate_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/own_transport").unwrap();
/// assert!(loader.carrier().active);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    carrier: CarrierConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///   (e.g., "./config/own_transport")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if
    /// `carrier.yaml` is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let carrier_path = path.as_ref().join("carrier.yaml");
        let carrier = Self::load_yaml::<CarrierConfig>(&carrier_path)?;

        Ok(Self { carrier })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the carrier configuration.
    pub fn carrier(&self) -> &CarrierConfig {
        &self.carrier
    }
}
