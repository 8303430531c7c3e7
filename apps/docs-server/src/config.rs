//! Docs server configuration loaded from environment variables.

use std::env;

/// Bind address and log format for the docs server.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    pub host: String,
    pub port: u16,
    pub json_logs: bool,
}

impl DocsConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("DOCS_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("DOCS_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),
            json_logs: lookup("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
