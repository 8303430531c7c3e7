//! Read-side options: sorting for list, criteria for search.

use std::cmp::Ordering;
use std::str::FromStr;

use super::Post;
use crate::error::DomainError;

/// Field a post listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
    Author,
    Date,
}

impl SortField {
    fn key<'a>(&self, post: &'a Post) -> &'a str {
        match self {
            SortField::Title => &post.title,
            SortField::Content => &post.content,
            SortField::Author => &post.author,
            SortField::Date => &post.date,
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            "author" => Ok(SortField::Author),
            "date" => Ok(SortField::Date),
            _ => Err(DomainError::InvalidParameter(
                "Can only sort by 'title'/'content'/'author'/'date'".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl From<&str> for SortDirection {
    /// Only `desc` selects descending order; anything else is ascending.
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

/// How a post listing should be ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
}

impl ListOptions {
    /// Parse raw query values. Empty strings count as absent.
    pub fn parse(sort: Option<&str>, direction: Option<&str>) -> Result<Self, DomainError> {
        let sort = sort
            .filter(|s| !s.is_empty())
            .map(SortField::from_str)
            .transpose()?;
        let direction = direction.filter(|d| !d.is_empty()).map(SortDirection::from);
        Ok(Self { sort, direction })
    }

    /// Return `posts` in the requested order.
    ///
    /// With neither field nor direction the stored order is kept. A direction
    /// alone orders by title. Keys compare case-insensitively and the sort is
    /// stable in both directions, so equal keys keep their stored order.
    pub fn apply(&self, mut posts: Vec<Post>) -> Vec<Post> {
        if self.sort.is_none() && self.direction.is_none() {
            return posts;
        }

        let field = self.sort.unwrap_or(SortField::Title);
        let direction = self.direction.unwrap_or_default();

        match direction {
            SortDirection::Asc => posts.sort_by_cached_key(|post| field.key(post).to_lowercase()),
            // Reversed comparator rather than a reversed result, so ties stay put.
            SortDirection::Desc => posts.sort_by(|a, b| compare_desc(field, a, b)),
        }
        posts
    }
}

fn compare_desc(field: SortField, a: &Post, b: &Post) -> Ordering {
    field
        .key(b)
        .to_lowercase()
        .cmp(&field.key(a).to_lowercase())
}

/// Substring filters for search, already lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

impl SearchCriteria {
    pub fn new(
        title: impl AsRef<str>,
        content: impl AsRef<str>,
        author: impl AsRef<str>,
        date: impl AsRef<str>,
    ) -> Self {
        Self {
            title: title.as_ref().to_lowercase(),
            content: content.as_ref().to_lowercase(),
            author: author.as_ref().to_lowercase(),
            date: date.as_ref().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.content.is_empty()
            && self.author.is_empty()
            && self.date.is_empty()
    }

    /// A post matches when any non-empty criterion is contained in its field.
    pub fn matches(&self, post: &Post) -> bool {
        contains(&post.title, &self.title)
            || contains(&post.content, &self.content)
            || contains(&post.author, &self.author)
            || contains(&post.date, &self.date)
    }
}

fn contains(field: &str, needle: &str) -> bool {
    !needle.is_empty() && field.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, author: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: format!("content {id}"),
            author: author.to_string(),
            date: "2023-06-07".to_string(),
        }
    }

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_parse_rejects_unknown_sort_field() {
        let err = ListOptions::parse(Some("id"), None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidParameter(_)));
    }

    #[test]
    fn test_parse_treats_empty_values_as_absent() {
        assert_eq!(
            ListOptions::parse(Some(""), Some("")).unwrap(),
            ListOptions::default()
        );
    }

    #[test]
    fn test_no_options_keeps_stored_order() {
        let posts = vec![post(1, "b", "x"), post(2, "a", "x")];
        assert_eq!(ids(&ListOptions::default().apply(posts)), vec![1, 2]);
    }

    #[test]
    fn test_direction_alone_sorts_by_title() {
        let posts = vec![post(1, "b", "x"), post(2, "a", "x")];
        let options = ListOptions::parse(None, Some("asc")).unwrap();
        assert_eq!(ids(&options.apply(posts)), vec![2, 1]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let posts = vec![post(1, "banana", "x"), post(2, "Apple", "x"), post(3, "cherry", "x")];
        let options = ListOptions::parse(Some("title"), None).unwrap();
        assert_eq!(ids(&options.apply(posts)), vec![2, 1, 3]);
    }

    #[test]
    fn test_ties_keep_stored_order_in_both_directions() {
        let posts = vec![
            post(1, "t", "Bob"),
            post(2, "t", "alice"),
            post(3, "t", "bob"),
            post(4, "t", "Alice"),
        ];

        let asc = ListOptions::parse(Some("author"), Some("asc")).unwrap();
        assert_eq!(ids(&asc.apply(posts.clone())), vec![2, 4, 1, 3]);

        let desc = ListOptions::parse(Some("author"), Some("desc")).unwrap();
        assert_eq!(ids(&desc.apply(posts)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_unknown_direction_is_ascending() {
        assert_eq!(SortDirection::from("sideways"), SortDirection::Asc);
        assert_eq!(SortDirection::from("DESC"), SortDirection::Desc);
    }

    #[test]
    fn test_search_is_or_across_fields() {
        let criteria = SearchCriteria::new("first", "", "ALICE", "");
        assert!(criteria.matches(&post(1, "First post", "bob")));
        assert!(criteria.matches(&post(2, "other", "Alice")));
        assert!(!criteria.matches(&post(3, "other", "bob")));
    }

    #[test]
    fn test_empty_criteria_match_nothing_but_report_empty() {
        let criteria = SearchCriteria::default();
        assert!(criteria.is_empty());
        assert!(!criteria.matches(&post(1, "anything", "anyone")));
    }
}
