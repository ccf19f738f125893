//! Client configuration.

/// Environment variable holding the server base URL.
pub const BASE_URL_ENV: &str = "RULESET_BASE_URL";

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where the ruleset endpoints live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `RULESET_BASE_URL`, falling back to the default when the variable
    /// is missing or blank.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
