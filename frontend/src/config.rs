//! Build-time configuration.
//!
//! Values are read from the environment when the WASM bundle is compiled,
//! e.g. `DIARY_API_BASE_URL=https://api.example trunk build`.

use std::str::FromStr;

use log::LevelFilter;

const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for API paths. Empty means same origin.
    pub api_base_url: String,
    /// Local storage key holding the bearer token
    pub token_storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            token_storage_key: DEFAULT_TOKEN_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("DIARY_API_BASE_URL"),
            option_env!("DIARY_TOKEN_KEY"),
            option_env!("DIARY_LOG_LEVEL"),
        )
    }

    fn from_values(base_url: Option<&str>, token_key: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        let non_empty = |value: Option<&str>| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            api_base_url: non_empty(base_url)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            token_storage_key: non_empty(token_key).unwrap_or(defaults.token_storage_key),
            log_level: log_level
                .and_then(|level| LevelFilter::from_str(level.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.token_storage_key, "token");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(
            Some("https://diary.example/"),
            Some("diary-token"),
            Some("DEBUG"),
        );
        assert_eq!(config.api_base_url, "https://diary.example");
        assert_eq!(config.token_storage_key, "diary-token");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some(""), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
