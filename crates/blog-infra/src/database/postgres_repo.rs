//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewBlogPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};

/// PostgreSQL post store.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn store_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let models = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let active_model: blog_post::ActiveModel = post.into_post(Uuid::new_v4()).into();
        let model = active_model.insert(&self.db).await.map_err(store_error)?;

        tracing::debug!(post_id = %model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update_by_id(&self, id: Uuid, changes: PostChanges) -> Result<BlogPost, RepoError> {
        if !changes.is_empty() {
            let result = BlogPostEntity::update_many()
                .set(blog_post::ActiveModel::from(changes))
                .filter(blog_post::Column::Id.eq(id))
                .exec(&self.db)
                .await
                .map_err(store_error)?;

            if result.rows_affected == 0 {
                return Err(RepoError::NotFound);
            }
        }

        self.find_by_id(id).await?.ok_or(RepoError::NotFound)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let result = BlogPostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        tracing::warn!(removed = result.rows_affected, "Dropped all posts");
        Ok(result.rows_affected)
    }
}
