//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

/// Where posts live and what a new collection starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Start a new collection with the sample posts.
    pub seed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File(PathBuf),
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File(_) => "file",
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let file = lookup("POSTS_FILE").unwrap_or_else(|| "data/posts.json".to_string());

        let backend = match lookup("POSTS_STORAGE").as_deref() {
            None | Some("memory") => StorageBackend::Memory,
            Some("file") => StorageBackend::File(PathBuf::from(file)),
            Some(other) => {
                tracing::warn!(value = %other, "Unknown POSTS_STORAGE, using in-memory storage");
                StorageBackend::Memory
            }
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5002),
            storage: StorageConfig {
                backend,
                seed: lookup("POSTS_SEED")
                    .map(|v| v != "false" && v != "0")
                    .unwrap_or(true),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5002);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.storage.seed);
    }

    #[test]
    fn test_file_storage_uses_posts_file() {
        let config = config(&[
            ("POSTS_STORAGE", "file"),
            ("POSTS_FILE", "/tmp/blog.json"),
            ("POSTS_SEED", "false"),
        ]);
        assert_eq!(
            config.storage.backend,
            StorageBackend::File(PathBuf::from("/tmp/blog.json"))
        );
        assert!(!config.storage.seed);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config(&[("PORT", "http"), ("POSTS_STORAGE", "redis")]);
        assert_eq!(config.port, 5002);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }
}
