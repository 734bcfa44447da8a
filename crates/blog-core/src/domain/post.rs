use blog_shared::PostResponse;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog post as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Public representation returned by the API.
    pub fn serialize(&self) -> PostResponse {
        PostResponse {
            id: self.id,
            author: self.author.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            created: self.created,
        }
    }
}

/// A validated post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub author: String,
    pub title: String,
    pub content: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl NewBlogPost {
    /// Validate a creation payload. `author` is checked before `title`.
    pub fn new(
        author: Option<String>,
        title: Option<String>,
        content: Option<String>,
        created: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            author: require_field("author", author)?,
            title: require_field("title", title)?,
            content,
            created,
        })
    }

    /// Stamp the store-assigned id. `created` defaults to now.
    pub fn into_post(self, id: Uuid) -> BlogPost {
        BlogPost {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
            created: self.created.unwrap_or_else(Utc::now),
        }
    }
}

/// Partial update of a post. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    /// Fields a client may change. `id` and `created` are never updatable.
    pub const UPDATABLE_FIELDS: [&'static str; 3] = ["author", "title", "content"];

    /// Supplied `author` and `title` must be non-empty.
    pub fn new(
        author: Option<String>,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            author: author.map(|v| require_field("author", Some(v))).transpose()?,
            title: title.map(|v| require_field("title", Some(v))).transpose()?,
            content,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Names of the fields this update supplies.
    pub fn fields(&self) -> Vec<&'static str> {
        let supplied = [
            self.author.is_some(),
            self.title.is_some(),
            self.content.is_some(),
        ];
        Self::UPDATABLE_FIELDS
            .iter()
            .zip(supplied)
            .filter_map(|(name, present)| present.then_some(*name))
            .collect()
    }

    /// Write the supplied fields onto `post`.
    pub fn apply(&self, post: &mut BlogPost) {
        if let Some(author) = &self.author {
            post.author = author.clone();
        }
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = Some(content.clone());
        }
    }
}

/// A body id, when sent, must name the same post as the request path.
pub fn ensure_ids_match(path_id: Uuid, body_id: Option<&str>) -> Result<(), DomainError> {
    match body_id {
        Some(raw) if raw.parse::<Uuid>().ok() != Some(path_id) => {
            Err(DomainError::Validation(format!(
                "Request path id ({path_id}) and request body id ({raw}) must match"
            )))
        }
        _ => Ok(()),
    }
}

fn require_field(name: &str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(DomainError::Validation(format!("`{name}` must not be empty"))),
        None => Err(DomainError::Validation(format!(
            "Missing `{name}` in request body"
        ))),
    }
}
