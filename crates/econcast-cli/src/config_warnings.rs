use econcast_config::EconcastConfig;

/// Emit warnings for a missing API key and likely mistyped env var keys.
pub fn warn_unconfigured(config: &EconcastConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &EconcastConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    if config.gemini.is_configured() {
        return Vec::new();
    }

    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = vec![
        "No Gemini API key configured; the forecast will fall back. Set GEMINI_API_KEY or ECONCAST_GEMINI__API_KEY."
            .to_string(),
    ];

    if env_keys
        .iter()
        .any(|key| key.starts_with("ECONCAST_GEMINI") && !key.starts_with("ECONCAST_GEMINI__"))
    {
        warnings.push(
            "ECONCAST_GEMINI* env vars exist but were not applied. Use double underscores (example: ECONCAST_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    warnings
}

#[cfg(test)]
mod tests {
    use econcast_config::{EconcastConfig, GeminiConfig};

    use super::collect_unconfigured_warnings;

    #[test]
    fn configured_key_emits_nothing() {
        let config = EconcastConfig {
            gemini: GeminiConfig {
                api_key: "AIza-test".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(&config, Vec::new());
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_key_warns() {
        let warnings = collect_unconfigured_warnings(&EconcastConfig::default(), Vec::new());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("GEMINI_API_KEY"));
    }

    #[test]
    fn single_underscore_typo_warns() {
        let env = vec![("ECONCAST_GEMINI_API_KEY".to_string(), "AIza".to_string())];
        let warnings = collect_unconfigured_warnings(&EconcastConfig::default(), env);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[1].contains("ECONCAST_GEMINI__API_KEY"));
    }
}
