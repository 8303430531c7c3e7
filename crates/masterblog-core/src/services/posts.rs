use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ListOptions, NewPost, Post, PostPatch, SearchCriteria};
use crate::error::DomainError;
use crate::ports::PostStore;

/// The five post operations over a shared record store.
///
/// Every operation runs load -> apply -> save while holding one lock, so
/// concurrent requests cannot hand out the same id or lose each other's
/// updates. The lock also guards the highest id seen so far, whether issued
/// here or already present in the store; ids are never reissued while the
/// service is alive, even after the newest post is deleted.
pub struct PostService {
    store: Arc<dyn PostStore>,
    last_issued_id: Mutex<u64>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            last_issued_id: Mutex::new(0),
        }
    }

    /// All posts, optionally ordered. Stored order is never changed.
    pub async fn list(&self, options: ListOptions) -> Result<Vec<Post>, DomainError> {
        let mut last_issued_id = self.last_issued_id.lock().await;
        let posts = self.load(&mut last_issued_id).await?;
        tracing::debug!(count = posts.len(), ?options, "Listing posts");
        Ok(options.apply(posts))
    }

    /// Append a new post dated today and return it.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut last_issued_id = self.last_issued_id.lock().await;
        let mut posts = self.load(&mut last_issued_id).await?;

        let id = *last_issued_id + 1;
        let post = Post::new(id, input);

        posts.push(post.clone());
        self.store.save(&posts).await?;
        *last_issued_id = id;

        tracing::info!(post_id = id, "Post created");
        Ok(post)
    }

    /// Patch the post with `id` in place and return its new state.
    pub async fn update(&self, id: u64, patch: PostPatch) -> Result<Post, DomainError> {
        let mut last_issued_id = self.last_issued_id.lock().await;
        let mut posts = self.load(&mut last_issued_id).await?;

        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound { id })?;
        post.apply(patch);
        let updated = post.clone();

        self.store.save(&posts).await?;

        tracing::info!(post_id = id, "Post updated");
        Ok(updated)
    }

    /// Remove the post with `id` and return it.
    pub async fn delete(&self, id: u64) -> Result<Post, DomainError> {
        let mut last_issued_id = self.last_issued_id.lock().await;
        let mut posts = self.load(&mut last_issued_id).await?;

        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::NotFound { id })?;
        let removed = posts.remove(index);

        self.store.save(&posts).await?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(removed)
    }

    /// Posts matching any criterion, in stored order. No criteria returns everything.
    pub async fn search(&self, criteria: SearchCriteria) -> Result<Vec<Post>, DomainError> {
        let mut last_issued_id = self.last_issued_id.lock().await;
        let posts = self.load(&mut last_issued_id).await?;

        if criteria.is_empty() {
            return Ok(posts);
        }

        let matches: Vec<Post> = posts.into_iter().filter(|p| criteria.matches(p)).collect();
        tracing::debug!(count = matches.len(), ?criteria, "Searched posts");
        Ok(matches)
    }

    /// Load the collection and raise the high-water mark to its largest id.
    /// Callers must hold the `last_issued_id` lock.
    async fn load(&self, last_issued_id: &mut u64) -> Result<Vec<Post>, DomainError> {
        let posts = self.store.load().await?;
        if let Some(max_id) = posts.iter().map(|p| p.id).max() {
            *last_issued_id = (*last_issued_id).max(max_id);
        }
        Ok(posts)
    }
}
