use crate::shared::storage;
use contracts::shared::config::UiConfig;

/// localStorage key holding an optional TOML override of the UI config.
pub const CONFIG_STORAGE_KEY: &str = "app-ui-config";

/// Loads the UI config, preferring a stored override when it is valid.
pub fn load_ui_config() -> anyhow::Result<UiConfig> {
    let stored = storage::get_item(CONFIG_STORAGE_KEY);
    UiConfig::load_or_default(stored.as_deref())
}
