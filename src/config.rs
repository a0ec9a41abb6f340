// SPDX-License-Identifier: MIT

use crate::error::ToolError;
use std::env;
use url::Url;

/// Public placeholder API host
pub const DEFAULT_BASE_URL: &str = "http://jsonplaceholder.org";

/// Environment variable overriding the API host
pub const BASE_URL_ENV: &str = "PLACEHOLDER_BASE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    base_url: String,
}

impl Config {
    /// Build a config for an explicit base URL (trailing slash is dropped)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ToolError> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| ToolError::config(format!("invalid base URL '{}': {}", base_url, e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Read `PLACEHOLDER_BASE_URL`, falling back to the public host.
    pub fn from_env() -> Result<Self, ToolError> {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_public_host() {
        assert_eq!(Config::default().base_url(), "http://jsonplaceholder.org");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_env_override_and_empty_fallback() {
        // Only this test touches the variable
        env::set_var(BASE_URL_ENV, "http://127.0.0.1:3000/");
        assert_eq!(
            Config::from_env().unwrap().base_url(),
            "http://127.0.0.1:3000"
        );

        env::set_var(BASE_URL_ENV, "");
        assert_eq!(Config::from_env().unwrap().base_url(), DEFAULT_BASE_URL);

        env::remove_var(BASE_URL_ENV);
        assert_eq!(Config::from_env().unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_invalid_url() {
        let err = Config::new("not a url").unwrap_err();
        assert!(matches!(err, ToolError::Config(_)));
        assert!(err.to_string().contains("not a url"));
    }
}
