//! UI configuration parsing from environment variables.
//!
//! This module handles window geometry and the initial language.

use anyhow::{Context, Result};
use std::env;

/// UI environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct UiEnvConfig {
    pub language: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiEnvConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl UiEnvConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            language: env::var("UI_LANGUAGE").unwrap_or_else(|_| "en".to_string()),
            window_width: Self::parse_dimension("WINDOW_WIDTH", 1200.0)?,
            window_height: Self::parse_dimension("WINDOW_HEIGHT", 800.0)?,
        })
    }

    fn parse_dimension(key: &str, default: f32) -> Result<f32> {
        let value = env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<f32>()
            .context(format!("Failed to parse {}", key))?;

        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            anyhow::bail!("{} must be a positive number, got {}", key, value)
        }
    }
}
