//! Server Configuration

use config::{Config, ConfigError, Environment};
use predictor::DEFAULT_WEIGHTS_DIR;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listener address (all interfaces by default)
    pub bind_addr: String,
    /// Directory holding the fitted artifacts
    pub weights_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            weights_dir: PathBuf::from(DEFAULT_WEIGHTS_DIR),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults plus `CARPRICE_*` environment
    /// overrides (`CARPRICE_BIND_ADDR`, `CARPRICE_WEIGHTS_DIR`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_addr", DEFAULT_BIND_ADDR)?
            .set_default("weights_dir", DEFAULT_WEIGHTS_DIR)?
            .add_source(Environment::with_prefix("CARPRICE"))
            .build()?
            .try_deserialize()
    }
}
