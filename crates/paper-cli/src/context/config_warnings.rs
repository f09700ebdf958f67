use paper_config::{BackendConfig, GeneralConfig, HistoryConfig, PaxConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PaxConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PaxConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        (
            "Backend",
            "PAX_BACKEND",
            "PAX_BACKEND__BASE_URL",
            config.backend == BackendConfig::default(),
        ),
        (
            "History",
            "PAX_HISTORY",
            "PAX_HISTORY__PATH",
            config.history == HistoryConfig::default(),
        ),
        (
            "General",
            "PAX_GENERAL",
            "PAX_GENERAL__DEFAULT_SOURCE",
            config.general == GeneralConfig::default(),
        ),
    ];

    sections
        .into_iter()
        .filter(|(_, prefix, _, at_default)| *at_default && has_env_prefix(&env_keys, prefix))
        .map(|(name, prefix, example, _)| {
            format!(
                "{name} config appears default while {prefix}* env vars exist. Use double underscores (example: {example})."
            )
        })
        .collect()
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
