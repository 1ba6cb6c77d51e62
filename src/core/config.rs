//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own options (site address, pkg dir) still come from
//! `[package.metadata.leptos]` and `LEPTOS_*` variables.

/// Filter used when `LOG_FILTER` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `tracing_subscriber` env-filter directive
    /// Example: info,jirabot_landing=debug
    pub log_filter: String,

    /// Compress responses with Brotli/Gzip
    pub enable_compression: bool,

    /// Public origin used for canonical and Open Graph URLs
    /// Example: https://jirabot.example.com
    pub site_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Used by `from_env` and tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("LOG_FILTER")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            enable_compression: lookup("ENABLE_COMPRESSION")
                .map(|value| parse_flag(&value))
                .unwrap_or(true),
            site_url: lookup("SITE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            enable_compression: true,
            site_url: None,
        }
    }
}

/// Anything except an explicit "off" value enables the flag.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert!(config.enable_compression);
        assert!(config.site_url.is_none());
    }

    #[test]
    fn test_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("LOG_FILTER", "debug,hyper=warn"),
            ("ENABLE_COMPRESSION", "false"),
            ("SITE_URL", "https://jirabot.example.com/"),
        ]));

        assert_eq!(config.log_filter, "debug,hyper=warn");
        assert!(!config.enable_compression);
        assert_eq!(
            config.site_url,
            Some("https://jirabot.example.com".to_string())
        );
    }

    #[test]
    fn test_compression_flag_values() {
        for off in ["0", "false", "No", " OFF "] {
            let config = Config::from_lookup(lookup_from(&[("ENABLE_COMPRESSION", off)]));
            assert!(!config.enable_compression, "{off:?} should disable");
        }
        for on in ["1", "true", "yes", ""] {
            let config = Config::from_lookup(lookup_from(&[("ENABLE_COMPRESSION", on)]));
            assert!(config.enable_compression, "{on:?} should enable");
        }
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("LOG_FILTER", "  "), ("SITE_URL", "")]));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.site_url.is_none());
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        let expected = Config::from_lookup(|key| std::env::var(key).ok());
        assert_eq!(Config::from_env(), expected);
    }
}
