//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and bundle paths come from `[package.metadata.leptos]` instead.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive, e.g. `info` or `launchpad=debug,tower_http=warn`
    pub log_filter: String,

    /// Whether responses are compressed (brotli/gzip)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("COMPRESSION").ok(),
        )
    }

    /// Build configuration from raw variable values
    pub fn from_vars(log_filter: Option<String>, compression: Option<String>) -> Self {
        Self {
            log_filter: log_filter
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            compression: compression.as_deref().map(parse_flag).unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

/// Anything other than an explicit "off" value enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert!(config.compression);
    }

    #[test]
    fn test_log_filter_from_var() {
        let config = Config::from_vars(Some("launchpad=debug".to_string()), None);
        assert_eq!(config.log_filter, "launchpad=debug");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = Config::from_vars(Some("  ".to_string()), None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_compression_disabled() {
        for value in ["0", "false", "OFF", " no "] {
            let config = Config::from_vars(None, Some(value.to_string()));
            assert!(!config.compression, "{value:?} should disable compression");
        }
    }

    #[test]
    fn test_compression_enabled() {
        for value in ["1", "true", "on", "brotli"] {
            let config = Config::from_vars(None, Some(value.to_string()));
            assert!(config.compression, "{value:?} should enable compression");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; the filter is never blank either way
        let config = Config::from_env();
        assert!(!config.log_filter.trim().is_empty());
    }
}
