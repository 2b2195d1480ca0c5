//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use econcast_config::EconcastConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "toml-key"
base_url = "http://localhost:8080"
timeout_secs = 30
user_agent = "forecast-worker/2"
"#,
        )?;

        let config: EconcastConfig = Figment::from(Serialized::defaults(EconcastConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.gemini.api_key, "toml-key");
        assert_eq!(config.gemini.base_url, "http://localhost:8080");
        assert_eq!(config.gemini.timeout_secs, Some(30));
        assert_eq!(config.gemini.user_agent, "forecast-worker/2");
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn loads_forecast_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[forecast]
model = "gemini-2.5-flash"
temperature = 0.0
default_year = "2028"
"#,
        )?;

        let config: EconcastConfig = Figment::from(Serialized::defaults(EconcastConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.forecast.model, "gemini-2.5-flash");
        assert!(config.forecast.temperature.abs() < f32::EPSILON);
        assert_eq!(config.forecast.default_year, "2028");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[forecast]
model = "gemini-2.5-flash"
"#,
        )?;

        let config: EconcastConfig = Figment::from(Serialized::defaults(EconcastConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.forecast.model, "gemini-2.5-flash");
        assert!((config.forecast.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.forecast.default_year, "2026");
        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com"
        );
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".econcast")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".econcast/config.toml",
            r#"
[forecast]
default_year = "2031"
"#,
        )?;

        let config = EconcastConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.forecast.default_year, "2031");
        Ok(())
    });
}

#[test]
fn invalid_temperature_in_project_config_fails_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(jail.directory().join(".econcast")).map_err(|e| e.to_string())?;
        jail.create_file(
            ".econcast/config.toml",
            r#"
[forecast]
temperature = 3.5
"#,
        )?;

        assert!(EconcastConfig::load().is_err());
        Ok(())
    });
}
