//! Posts a fresh store starts with.

use masterblog_core::domain::Post;

/// The two sample posts every new collection is seeded with.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            title: "First post".to_string(),
            content: "This is the first post.".to_string(),
            author: "Robert".to_string(),
            date: "2023-06-07".to_string(),
        },
        Post {
            id: 2,
            title: "Second post".to_string(),
            content: "This is the second post.".to_string(),
            author: "Robert".to_string(),
            date: "2023-06-07".to_string(),
        },
    ]
}
