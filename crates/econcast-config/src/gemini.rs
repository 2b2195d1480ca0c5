//! Gemini API connection settings.

use serde::{Deserialize, Serialize};

/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    "econcast/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Gemini Developer API key. Also read from `GEMINI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// API root, without the `/v1beta` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout. Unset means the HTTP client's defaults apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is available.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = GeminiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.user_agent, "econcast/0.1");
    }

    #[test]
    fn configured_when_key_set() {
        let config = GeminiConfig {
            api_key: "AIza-test".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = GeminiConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
