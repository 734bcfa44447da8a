//! # Blog Core
//!
//! The domain layer of the blog API.
//! Pure business logic: the post model, its validation rules and the store port.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
