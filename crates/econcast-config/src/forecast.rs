//! Forecast generation settings.

use serde::{Deserialize, Serialize};

/// Pinned model version.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Low randomness for consistent predictions.
const fn default_temperature() -> f32 {
    0.3
}

fn default_year() -> String {
    "2026".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastConfig {
    /// Model identifier passed to the completion service.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature, 0.0-2.0.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Year used when the CLI is not given one.
    #[serde(default = "default_year")]
    pub default_year: String,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            default_year: default_year(),
        }
    }
}
