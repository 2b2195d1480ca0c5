//! # econcast-config
//!
//! Layered configuration loading for econcast using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ECONCAST_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY`, mapped to `gemini.api_key`
//! 3. Project-level `.econcast/config.toml`
//! 4. User-level `~/.config/econcast/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ECONCAST_GEMINI__API_KEY` -> `gemini.api_key`,
//! `ECONCAST_FORECAST__MODEL` -> `forecast.model`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use econcast_config::EconcastConfig;
//!
//! let config = EconcastConfig::load_with_dotenv().expect("config");
//! if !config.gemini.is_configured() {
//!     eprintln!("set GEMINI_API_KEY");
//! }
//! println!("model: {}", config.forecast.model);
//! ```

mod error;
mod forecast;
mod gemini;

pub use error::ConfigError;
pub use forecast::{DEFAULT_MODEL, ForecastConfig};
pub use gemini::{DEFAULT_BASE_URL, GeminiConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for all econcast environment variables.
pub const ENV_PREFIX: &str = "ECONCAST_";

/// Conventional variable holding the Gemini Developer API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EconcastConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

impl EconcastConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or has the
    /// wrong shape, or [`ConfigError::InvalidValue`] if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".econcast/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&[GEMINI_API_KEY_ENV])
                    .map(|_| "gemini.api_key".into()),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty model, a temperature
    /// outside 0.0-2.0, or an empty base URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forecast.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "forecast.model".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(0.0..=2.0).contains(&self.forecast.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "forecast.temperature".into(),
                reason: format!("{} is outside 0.0-2.0", self.forecast.temperature),
            });
        }
        if self.gemini.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "gemini.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("econcast").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current
    /// directory. Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
