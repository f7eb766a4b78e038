//! Configuration module for the price predictor.
//!
//! Settings come from environment variables (optionally via a `.env` file),
//! organized by concern: Model and UI.

mod model_config;
mod ui_config;

pub use model_config::{DEFAULT_MODEL_PATH, ModelEnvConfig};
pub use ui_config::UiEnvConfig;

use anyhow::{Context, Result};

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelEnvConfig,
    pub ui: UiEnvConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model = ModelEnvConfig::from_env();
        let ui = UiEnvConfig::from_env().context("Failed to load UI config")?;

        Ok(Self { model, ui })
    }
}
