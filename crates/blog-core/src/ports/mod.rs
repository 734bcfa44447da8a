//! Ports - trait definitions for external dependencies.
//! The document store is reached only through these.

mod repository;

pub use repository::PostRepository;
