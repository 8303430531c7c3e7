//! Domain entities - the core business objects.

mod post;
mod query;

pub use post::{DATE_FORMAT, NewPost, Post, PostPatch, today};
pub use query::{ListOptions, SearchCriteria, SortDirection, SortField};
