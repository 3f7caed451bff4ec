//! Generator configuration
//!
//! Replaces a process-wide "validate during creation" switch: every
//! generator owns its own copy.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::SpinParameters;

/// Failure to load a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Configuration for a [`crate::SpinGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Validate the base vector before spinning
    pub validate_during_creation: bool,
    /// Parameters used by `spin` when none are given
    pub parameters: SpinParameters,
}

impl SpinConfig {
    pub fn new(validate_during_creation: bool, parameters: SpinParameters) -> Self {
        Self {
            validate_during_creation,
            parameters,
        }
    }

    /// Default parameters with validation switched on
    pub fn validating() -> Self {
        Self {
            validate_during_creation: true,
            ..Self::default()
        }
    }

    /// Load from a JSON file; missing fields fall back to defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), ?config, "loaded spin config");
        Ok(config)
    }

    /// Save as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
