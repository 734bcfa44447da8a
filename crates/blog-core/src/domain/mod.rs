//! Domain entities - the core business objects.

mod post;

pub use post::{BlogPost, NewBlogPost, PostChanges, ensure_ids_match};
