use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Record store - owns the canonical, insertion-ordered collection of posts.
///
/// Implementations are interchangeable: callers load the whole collection,
/// change it, and hand the whole collection back to `save`.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load every post in stored order.
    async fn load(&self) -> Result<Vec<Post>, StoreError>;

    /// Replace the stored collection with `posts`.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}
