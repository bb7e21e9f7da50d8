//! Client configuration.
//!
//! Resolves the base URL of the remote notes API from an explicit value, the
//! `LEAF_API_URL` environment variable, or the local development default.

use std::env;

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Environment variable holding the notes API base URL.
pub const API_URL_ENV: &str = "LEAF_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Connection settings for the remote note collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `https://notes.example.com`
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build a config from an explicit base URL.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url.into())?,
        })
    }

    /// Read the base URL from `LEAF_API_URL`, falling back to the default.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }

    /// Resolve the base URL: explicit value, then environment, then default.
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        let url = normalize_text_option(explicit)
            .or_else(|| normalize_text_option(env::var(API_URL_ENV).ok()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let url = normalize_text_option(Some(raw))
        .ok_or_else(|| Error::Config("API base URL must not be empty".to_string()))?;
    if is_http_url(&url) {
        Ok(url.trim_end_matches('/').to_string())
    } else {
        Err(Error::Config(format!(
            "API base URL must include http:// or https:// (got `{url}`)"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slashes() {
        let config = ClientConfig::new(" https://notes.example.com// ").unwrap();
        assert_eq!(config.api_base_url, "https://notes.example.com");
    }

    #[test]
    fn new_rejects_invalid_values() {
        let empty = ClientConfig::new("   ").unwrap_err();
        assert!(empty.to_string().contains("must not be empty"));

        let missing_scheme = ClientConfig::new("notes.example.com").unwrap_err();
        assert!(missing_scheme.to_string().contains("http:// or https://"));
    }

    #[test]
    fn resolve_prefers_explicit_value() {
        let config = ClientConfig::resolve(Some("http://127.0.0.1:8080/".to_string())).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn default_points_at_local_dev_server() {
        assert_eq!(ClientConfig::default().api_base_url, DEFAULT_API_URL);
    }
}
