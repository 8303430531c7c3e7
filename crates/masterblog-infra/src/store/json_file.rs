//! JSON file record store - one document holding the whole collection.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use masterblog_core::domain::Post;
use masterblog_core::error::StoreError;
use masterblog_core::ports::PostStore;

/// Post store backed by a single JSON array on disk.
///
/// The file is read in full on every `load` and rewritten in full on every
/// `save`. Writes go to a sibling temporary file that is then renamed over
/// the target, so readers never observe a half-written document.
pub struct JsonFilePostStore {
    path: PathBuf,
}

impl JsonFilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `posts` to the file unless it already exists, creating parent
    /// directories as needed. Returns whether the file was created.
    pub async fn create_if_missing(&self, posts: &[Post]) -> Result<bool, StoreError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;
        if exists {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(parent, e))?;
        }

        self.save(posts).await?;
        tracing::info!(path = %self.path.display(), count = posts.len(), "Created posts file");
        Ok(true)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("posts.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PostStore for JsonFilePostStore {
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Posts file is not valid");
            StoreError::Malformed(format!("{}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        posts
            .serialize(&mut serializer)
            .map_err(|e| StoreError::Io(format!("failed to encode posts: {}", e)))?;

        let temp = self.temp_path();
        tokio::fs::write(&temp, &buf)
            .await
            .map_err(|e| io_error(&temp, e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), count = posts.len(), "Saved posts file");
        Ok(())
    }
}

fn io_error(path: &Path, err: std::io::Error) -> StoreError {
    StoreError::Io(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_posts;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFilePostStore::new(temp_dir.path().join("posts.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("posts.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = JsonFilePostStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_save_then_load_from_a_fresh_handle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("posts.json");

        JsonFilePostStore::new(&path).save(&seed_posts()).await.unwrap();

        let reloaded = JsonFilePostStore::new(&path).load().await.unwrap();
        assert_eq!(reloaded, seed_posts());
        assert!(!temp_dir.path().join("posts.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_is_a_pretty_json_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("posts.json");

        JsonFilePostStore::new(&path).save(&seed_posts()).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n    {\n        \"id\": 1,"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_create_if_missing_does_not_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFilePostStore::new(temp_dir.path().join("data").join("posts.json"));

        assert!(store.create_if_missing(&seed_posts()).await.unwrap());
        store.save(&[]).await.unwrap();
        assert!(!store.create_if_missing(&seed_posts()).await.unwrap());

        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFilePostStore::new(temp_dir.path().join("nope").join("posts.json"));

        let err = store.save(&seed_posts()).await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
