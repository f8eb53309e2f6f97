use super::amount_field::AmountBounds;
use anyhow::{bail, Context};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub amount: AmountBounds,
    pub notifications: NotificationsConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationsConfig {
    pub capacity: usize,
    pub dismiss_after_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    pub default: String,
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[pagination]
page_size_options = [10, 25, 50, 100]
default_page_size = 25

[amount]
min = 0

[notifications]
capacity = 5
dismiss_after_ms = 4000

[theme]
default = "light"
"#;

impl UiConfig {
    /// Parses `override_toml` when given, otherwise the embedded default.
    pub fn load(override_toml: Option<&str>) -> anyhow::Result<Self> {
        let config: UiConfig = match override_toml {
            Some(text) => {
                log::info!("Loading UI config from override");
                toml::from_str(text).context("failed to parse UI config override")?
            }
            None => {
                log::info!("Using default embedded UI configuration");
                toml::from_str(DEFAULT_CONFIG).context("failed to parse embedded UI config")?
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Like `load`, but an unusable override falls back to the embedded default.
    pub fn load_or_default(override_toml: Option<&str>) -> anyhow::Result<Self> {
        match Self::load(override_toml) {
            Ok(config) => Ok(config),
            Err(err) if override_toml.is_some() => {
                log::warn!("Ignoring UI config override: {err:#}");
                Self::load(None)
            }
            Err(err) => Err(err),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let p = &self.pagination;
        if p.page_size_options.is_empty() || p.page_size_options.contains(&0) {
            bail!("pagination.page_size_options must be non-empty and positive");
        }
        if !p.page_size_options.contains(&p.default_page_size) {
            bail!(
                "pagination.default_page_size {} is not one of {:?}",
                p.default_page_size,
                p.page_size_options
            );
        }
        if self.notifications.capacity == 0 {
            bail!("notifications.capacity must be at least 1");
        }
        self.amount.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = UiConfig::load(None).unwrap();
        assert_eq!(config.pagination.default_page_size, 25);
        assert_eq!(config.pagination.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.amount.min, Some(0));
        assert_eq!(config.amount.max, None);
        assert_eq!(config.notifications.capacity, 5);
        assert_eq!(config.theme.default, "light");
    }

    #[test]
    fn test_override_is_validated() {
        let bad_bounds = DEFAULT_CONFIG.replace("min = 0", "min = 10\nmax = 5");
        let err = UiConfig::load(Some(&bad_bounds)).unwrap_err();
        assert!(err.to_string().contains("invalid amount bounds"));

        let bad_size = DEFAULT_CONFIG.replace("default_page_size = 25", "default_page_size = 30");
        assert!(UiConfig::load(Some(&bad_size)).is_err());
    }

    #[test]
    fn test_amount_section_is_optional() {
        let without_amount = DEFAULT_CONFIG.replace("[amount]\nmin = 0\n", "");
        let config = UiConfig::load(Some(&without_amount)).unwrap();
        assert_eq!(config.amount, AmountBounds::unbounded());
    }

    #[test]
    fn test_broken_override_falls_back() {
        let config = UiConfig::load_or_default(Some("not = [valid")).unwrap();
        assert_eq!(config, UiConfig::load(None).unwrap());
    }
}
