//! Web app configuration
//!
//! The app runs in the browser, so settings are fixed at build time through
//! `TRACKFINDER_*` environment variables and fall back to the public catalog.

use reqwest::Url;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_API_BASE: &str = "https://itunes.apple.com";
pub const DEFAULT_COUNTRY: &str = "US";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid API base URL '{0}': {1}")]
    BaseUrl(String, String),
    #[error("Invalid country code: {0}")]
    Country(String),
    #[error("Invalid log level: {0}")]
    LogLevel(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebConfig {
    /// Catalog root; `/lookup` is appended for track lookups
    pub api_base_url: Url,
    /// Storefront used for prices and availability
    pub country: String,
    pub log_level: Level,
}

impl WebConfig {
    /// Build-time overrides on top of the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("TRACKFINDER_API_BASE"),
            option_env!("TRACKFINDER_COUNTRY"),
            option_env!("TRACKFINDER_LOG"),
        )
    }

    pub fn from_values(
        api_base: Option<&str>,
        country: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base = api_base.unwrap_or(DEFAULT_API_BASE);
        let api_base_url = Url::parse(base)
            .map_err(|e| ConfigError::BaseUrl(base.to_string(), e.to_string()))?;
        if api_base_url.cannot_be_a_base() {
            return Err(ConfigError::BaseUrl(
                base.to_string(),
                "not a base URL".to_string(),
            ));
        }

        let country = country.unwrap_or(DEFAULT_COUNTRY).trim().to_uppercase();
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::Country(country));
        }

        let level = log_level.unwrap_or("info");
        let log_level =
            Level::from_str(level).map_err(|_| ConfigError::LogLevel(level.to_string()))?;

        Ok(Self {
            api_base_url,
            country,
            log_level,
        })
    }

    /// `GET` URL for looking up a single track by id
    pub fn lookup_url(&self, track_id: &str) -> Url {
        let mut url = self.api_base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("lookup");
        }
        url.query_pairs_mut()
            .append_pair("id", track_id)
            .append_pair("country", &self.country);
        url
    }
}

/// Level to start logging at, before a config error can be reported
pub fn startup_log_level(config: &Result<WebConfig, ConfigError>) -> Level {
    match config {
        Ok(config) => config.log_level,
        Err(_) => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebConfig::from_values(None, None, None).unwrap();
        assert_eq!(config.api_base_url.as_str(), "https://itunes.apple.com/");
        assert_eq!(config.country, "US");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_lookup_url() {
        let config = WebConfig::from_values(None, None, None).unwrap();
        assert_eq!(
            config.lookup_url("1440857781").as_str(),
            "https://itunes.apple.com/lookup?id=1440857781&country=US"
        );
    }

    #[test]
    fn test_lookup_url_under_prefix() {
        let config =
            WebConfig::from_values(Some("http://localhost:8080/catalog/"), Some("gb"), None)
                .unwrap();
        assert_eq!(
            config.lookup_url("a b").as_str(),
            "http://localhost:8080/catalog/lookup?id=a+b&country=GB"
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            WebConfig::from_values(Some("not a url"), None, None),
            Err(ConfigError::BaseUrl(..))
        ));
        assert!(matches!(
            WebConfig::from_values(None, Some("USA"), None),
            Err(ConfigError::Country(c)) if c == "USA"
        ));
        assert!(matches!(
            WebConfig::from_values(None, None, Some("loud")),
            Err(ConfigError::LogLevel(l)) if l == "loud"
        ));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let config = WebConfig::from_values(None, None, Some("DEBUG")).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_startup_log_level() {
        let configured = WebConfig::from_values(None, None, Some("warn"));
        assert_eq!(startup_log_level(&configured), Level::WARN);

        let invalid = WebConfig::from_values(None, None, Some("loud"));
        assert_eq!(startup_log_level(&invalid), Level::INFO);
    }
}
