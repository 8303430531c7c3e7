//! # Masterblog Core
//!
//! The domain layer of the Masterblog API.
//! This crate contains the post model, the record store port and the post
//! operations, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, StoreError};
