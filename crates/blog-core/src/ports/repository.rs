use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, NewBlogPost, PostChanges};
use crate::error::RepoError;

/// Blog post store. Each call is a single-document operation except the
/// bulk `find_all` and `delete_all`.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, oldest `created` first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Insert a post. The store assigns the id.
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Apply `changes` to an existing post.
    ///
    /// Returns `RepoError::NotFound` if no post has this id, even when
    /// `changes` is empty.
    async fn update_by_id(&self, id: Uuid, changes: PostChanges) -> Result<BlogPost, RepoError>;

    /// Delete a post. Returns whether a post existed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepoError>;

    /// Remove every post, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
