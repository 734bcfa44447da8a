//! Data Transfer Objects - request/response types for the posts API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Body of `POST /posts`.
///
/// Required fields are kept as raw JSON so that a missing or wrongly typed
/// field can be reported by name instead of as a generic deserialization
/// failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<Value>,
    pub title: Option<Value>,
    pub content: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

/// Body of `PUT /posts/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Public representation of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub content: Option<String>,
    pub created: DateTime<Utc>,
}
