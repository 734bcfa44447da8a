//! Blog post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

use blog_core::domain::{BlogPost, PostChanges};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author: model.author,
            title: model.title,
            content: model.content,
            created: model.created.into(),
        }
    }
}

/// Conversion from domain BlogPost to a fully set ActiveModel.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            author: Set(post.author),
            title: Set(post.title),
            content: Set(post.content),
            created: Set(post.created.into()),
        }
    }
}

/// Only supplied fields are `Set`; `id` and `created` stay `NotSet`.
impl From<PostChanges> for ActiveModel {
    fn from(changes: PostChanges) -> Self {
        Self {
            author: changes.author.map_or(ActiveValue::NotSet, ActiveValue::Set),
            title: changes.title.map_or(ActiveValue::NotSet, ActiveValue::Set),
            content: changes
                .content
                .map_or(ActiveValue::NotSet, |c| ActiveValue::Set(Some(c))),
            ..Default::default()
        }
    }
}
