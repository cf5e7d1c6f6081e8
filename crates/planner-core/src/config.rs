//! Application Configuration
//!
//! Resolved at compile time: a wasm bundle has no process environment.
//! Set `PLANNER_BACKEND_URL` and `PLANNER_LOG_LEVEL` when building.

use tracing::Level;

/// Storage key of the persisted bearer token
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, e.g. `https://planner.example.com`; empty means same origin
    pub backend_url: String,
    pub token_key: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            token_key: TOKEN_KEY.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PLANNER_BACKEND_URL"), option_env!("PLANNER_LOG_LEVEL"))
    }

    fn from_values(backend_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url.map(str::to_string).unwrap_or(defaults.backend_url),
            log_level: log_level
                .and_then(|l| l.parse().ok())
                .unwrap_or(defaults.log_level),
            ..defaults
        }
    }

    /// `{backend}/api`
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_trims_trailing_slash() {
        let config = AppConfig::from_values(Some("https://planner.example.com/"), None);
        assert_eq!(config.api_base(), "https://planner.example.com/api");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, Some("not-a-level"));
        assert_eq!(config.api_base(), "/api");
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn test_log_level_parses() {
        let config = AppConfig::from_values(None, Some("debug"));
        assert_eq!(config.log_level, Level::DEBUG);
    }
}
