use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Date format used for the `date` field of a post.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Post entity - one blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

impl Post {
    /// Build a post from validated input, dated today.
    pub fn new(id: u64, input: NewPost) -> Self {
        Self {
            id,
            title: input.title,
            content: input.content,
            author: input.author,
            date: today(),
        }
    }

    /// Apply a patch: non-empty values replace, everything else is kept.
    /// The date is refreshed even when nothing changed.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = non_empty(patch.title) {
            self.title = title;
        }
        if let Some(content) = non_empty(patch.content) {
            self.content = content;
        }
        if let Some(author) = non_empty(patch.author) {
            self.author = author;
        }
        self.date = today();
    }
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewPost {
    /// Every field must be present and non-empty.
    pub fn try_new(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        match (non_empty(title), non_empty(content), non_empty(author)) {
            (Some(title), Some(content), Some(author)) => Ok(Self {
                title,
                content,
                author,
            }),
            _ => Err(DomainError::invalid_input()),
        }
    }
}

/// Replacement values for an update. `None` and `Some("")` both keep the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post {
            id: 1,
            title: "X".to_string(),
            content: "Y".to_string(),
            author: "Robert".to_string(),
            date: "2023-06-07".to_string(),
        }
    }

    #[test]
    fn test_new_post_requires_every_field() {
        assert!(NewPost::try_new(Some("A".into()), Some("B".into()), Some("C".into())).is_ok());
        assert!(NewPost::try_new(None, Some("B".into()), Some("C".into())).is_err());
        assert!(NewPost::try_new(Some("".into()), Some("B".into()), Some("C".into())).is_err());
        assert!(NewPost::try_new(Some("A".into()), Some("B".into()), Some("".into())).is_err());
    }

    #[test]
    fn test_apply_keeps_empty_fields() {
        let mut post = sample();
        post.apply(PostPatch {
            title: Some(String::new()),
            content: Some("Z".to_string()),
            author: None,
        });

        assert_eq!(post.title, "X");
        assert_eq!(post.content, "Z");
        assert_eq!(post.author, "Robert");
        assert_eq!(post.date, today());
    }

    #[test]
    fn test_date_serializes_as_plain_string() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["date"], "2023-06-07");
        assert_eq!(json["id"], 1);
    }
}
