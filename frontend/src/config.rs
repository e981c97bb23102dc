//! Build-time configuration.
//!
//! The front-end is a static bundle, so settings are baked in when Trunk
//! compiles it: `BUDGET_API_BASE_URL=https://api.example.com trunk build`.

use log::Level;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// localStorage key holding the bearer token.
pub const SESSION_TOKEN_KEY: &str = "authToken";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BUDGET_API_BASE_URL"),
            option_env!("BUDGET_LOG_LEVEL"),
        )
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            api_base_url,
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = Config::from_values(Some("https://budget.example.com/api/"), None);
        assert_eq!(config.api_base_url, "https://budget.example.com/api");
    }

    #[test]
    fn test_blank_base_url_falls_back() {
        let config = Config::from_values(Some("   "), None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(
            Config::from_values(None, Some("debug")).log_level,
            Level::Debug
        );
        assert_eq!(
            Config::from_values(None, Some("chatty")).log_level,
            DEFAULT_LOG_LEVEL
        );
    }
}
