//! Data Transfer Objects - request bodies and query strings for the posts API.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/posts`. Missing fields deserialize to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

/// Body of `PUT /api/posts/{id}`.
///
/// The outer `Option` records whether the key was sent at all; the inner one
/// is `None` for an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub author: Option<Option<String>>,
}

impl UpdatePostRequest {
    /// Whether every field key was present in the body.
    pub fn has_all_keys(&self) -> bool {
        self.title.is_some() && self.content.is_some() && self.author.is_some()
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Query string of `GET /api/posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListPostsQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl ListPostsQuery {
    /// Build from decoded query pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "sort" => &mut query.sort,
                "direction" => &mut query.direction,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

/// Query string of `GET /api/posts/search`. Absent keys are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchPostsQuery {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

impl SearchPostsQuery {
    /// Build from decoded query pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut title = None;
        let mut content = None;
        let mut author = None;
        let mut date = None;
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "title" => &mut title,
                "content" => &mut content,
                "author" => &mut author,
                "date" => &mut date,
                _ => continue,
            };
            slot.get_or_insert(value);
        }

        Self {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            author: author.unwrap_or_default(),
            date: date.unwrap_or_default(),
        }
    }
}
