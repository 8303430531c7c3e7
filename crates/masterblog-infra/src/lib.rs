//! # Masterblog Infrastructure
//!
//! Concrete implementations of the ports defined in `masterblog-core`.
//!
//! ## Record stores
//!
//! - [`InMemoryPostStore`] - process-local collection, never fails
//! - [`JsonFilePostStore`] - a single JSON array on disk, reloaded on every request

pub mod seed;
pub mod store;

pub use seed::seed_posts;
pub use store::{InMemoryPostStore, JsonFilePostStore};
