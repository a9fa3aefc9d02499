use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded so web builds need no
/// filesystem access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config and store it in the global `OnceLock`. Only
/// the first call has effect.
///
/// A config that fails to parse or validate falls back to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = AppConfig::from_toml_str_or_default(CONFIG_TOML);
        tracing::info!(
            features = ?config.features,
            namespace = %config.sidebar.storage_namespace,
            "site config loaded"
        );
        config
    })
}

/// The loaded config, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get().unwrap_or_else(load_config)
}
