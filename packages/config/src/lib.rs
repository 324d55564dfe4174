// ABOUTME: API location and client settings resolved from the environment
// ABOUTME: Invalid values surface as ConfigError instead of silently falling back

pub mod constants;

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use cms_core::{session_file, DEFAULT_API_BASE_URL};

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default retry budget
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid number for {name}: {source}")]
    InvalidNumber {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid API base URL '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),
}

/// Settings for the API gateway client.
///
/// `timeout` and `retry_attempts` are carried for reporting only; the
/// client issues each request once and waits for it to complete.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub session_path: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            session_path: session_file(),
        }
    }
}

impl ApiConfig {
    /// Config for an explicit base URL with every other setting defaulted
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(&base_url.into())?,
            ..Default::default()
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve settings through `lookup`, which returns the raw value of a variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup(constants::CMS_API_BASE_URL) {
            Some(url) if !url.trim().is_empty() => normalize_base_url(&url)?,
            _ => DEFAULT_API_BASE_URL.to_string(),
        };

        let timeout_ms = parse_number(&lookup, constants::CMS_API_TIMEOUT_MS)?
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let retry_attempts = parse_number(&lookup, constants::CMS_API_RETRY_ATTEMPTS)?
            .unwrap_or(DEFAULT_RETRY_ATTEMPTS);

        let session_path = lookup(constants::CMS_SESSION_FILE)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(session_file);

        let config = ApiConfig {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            retry_attempts,
            session_path,
        };
        debug!("Resolved API config: {:?}", config);
        Ok(config)
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr<Err = ParseIntError>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|source| ConfigError::InvalidNumber { name, source }),
        _ => Ok(None),
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.timeout, Duration::from_millis(10_000));
        assert_eq!(config.retry_attempts, 3);
        assert!(config.session_path.ends_with("session.toml"));
    }

    #[test]
    fn test_config_custom_values() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (constants::CMS_API_BASE_URL, "https://cms.example.com/api/"),
            (constants::CMS_API_TIMEOUT_MS, "2500"),
            (constants::CMS_API_RETRY_ATTEMPTS, "0"),
            (constants::CMS_SESSION_FILE, "/tmp/cms-session.toml"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://cms.example.com/api");
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.retry_attempts, 0);
        assert_eq!(config.session_path, PathBuf::from("/tmp/cms-session.toml"));
    }

    #[rstest]
    #[case(constants::CMS_API_TIMEOUT_MS, "ten")]
    #[case(constants::CMS_API_RETRY_ATTEMPTS, "-1")]
    fn test_config_invalid_numbers(#[case] name: &str, #[case] value: &str) {
        let result = ApiConfig::from_lookup(lookup_from(&[(name, value)]));
        assert!(matches!(result, Err(ConfigError::InvalidNumber { .. })));
    }

    #[rstest]
    #[case("localhost:3000/api")]
    #[case("ftp://example.com")]
    fn test_config_invalid_base_url(#[case] url: &str) {
        let result = ApiConfig::from_lookup(lookup_from(&[(constants::CMS_API_BASE_URL, url)]));
        assert_eq!(result, Err(ConfigError::InvalidBaseUrl(url.to_string())));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:8080/").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }
}
