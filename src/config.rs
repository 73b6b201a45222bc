//! Deployment configuration for group parameters
//!
//! Every prover and verifier in a deployment must load the same `(G, P)`.
//! The parameters live in a small JSON file:
//!
//! ```json
//! { "generator": "3", "modulus": "0xffff...fc2f" }
//! ```
//!
//! Values may be decimal or `0x`-prefixed hex.

use crate::error::ZkError;
use crate::zk::encoding::parse_integer;
use crate::zk::ProofParameters;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable naming the parameters file
pub const PARAMS_ENV_VAR: &str = "ZKPROOF_PARAMS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read or write parameters file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed parameters file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field '{field}' is not a decimal or 0x-hex integer: {value}")]
    BadInteger { field: &'static str, value: String },

    #[error(transparent)]
    Parameters(#[from] ZkError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParametersConfig {
    pub generator: String,
    pub modulus: String,
}

impl ParametersConfig {
    pub fn from_parameters(params: &ProofParameters) -> Self {
        Self {
            generator: params.generator().to_str_radix(10),
            modulus: format!("0x{}", params.modulus().to_str_radix(16)),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        info!("Loaded group parameters from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("Saved group parameters to {}", path.display());
        Ok(())
    }

    /// Load from the file named by `ZKPROOF_PARAMS`, or fall back to the
    /// standard parameters when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(PARAMS_ENV_VAR) {
            Ok(path) if !path.is_empty() => Self::load(path),
            _ => {
                debug!("{} not set, using standard group parameters", PARAMS_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate into `ProofParameters`
    pub fn to_parameters(&self) -> Result<ProofParameters, ConfigError> {
        let generator = parse_integer(&self.generator).ok_or_else(|| ConfigError::BadInteger {
            field: "generator",
            value: self.generator.clone(),
        })?;
        let modulus = parse_integer(&self.modulus).ok_or_else(|| ConfigError::BadInteger {
            field: "modulus",
            value: self.modulus.clone(),
        })?;
        Ok(ProofParameters::new(generator, modulus)?)
    }
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self::from_parameters(&ProofParameters::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("zkproof-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_round_trips_to_standard() {
        let config = ParametersConfig::default();
        assert_eq!(config.generator, "3");
        assert!(config.modulus.starts_with("0xffffffff"));
        assert_eq!(config.to_parameters().unwrap(), ProofParameters::standard());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save-load");
        let config = ParametersConfig {
            generator: "5".to_string(),
            modulus: "1000003".to_string(),
        };
        config.save(&path).unwrap();
        let loaded = ParametersConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
        let params = loaded.to_parameters().unwrap();
        assert_eq!(params.modulus().to_string(), "1000003");
    }

    #[test]
    fn test_bad_values() {
        let config = ParametersConfig {
            generator: "two".to_string(),
            modulus: "1000003".to_string(),
        };
        assert!(matches!(
            config.to_parameters(),
            Err(ConfigError::BadInteger { field: "generator", .. })
        ));

        let composite = ParametersConfig {
            generator: "2".to_string(),
            modulus: "1000001".to_string(),
        };
        assert!(matches!(
            composite.to_parameters(),
            Err(ConfigError::Parameters(ZkError::InvalidParameters(_)))
        ));
    }

    #[test]
    fn test_missing_and_malformed_files() {
        assert!(matches!(
            ParametersConfig::load(temp_path("does-not-exist")),
            Err(ConfigError::Io(_))
        ));

        let path = temp_path("malformed");
        std::fs::write(&path, "{ not json").unwrap();
        let result = ParametersConfig::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }
}
