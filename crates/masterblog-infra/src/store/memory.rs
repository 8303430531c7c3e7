//! In-memory record store - the collection lives as long as the process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use masterblog_core::domain::Post;
use masterblog_core::error::StoreError;
use masterblog_core::ports::PostStore;

/// In-memory post store using a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start from an existing collection, kept in the given order.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let mut stored = self.posts.write().await;
        *stored = posts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_posts;

    #[tokio::test]
    async fn test_empty_by_default() {
        let store = InMemoryPostStore::new();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_collection() {
        let store = InMemoryPostStore::with_posts(seed_posts());

        let mut posts = store.load().await.unwrap();
        posts.remove(0);
        store.save(&posts).await.unwrap();

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].id, 2);
    }
}
