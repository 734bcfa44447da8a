//! Blog post handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;
use uuid::Uuid;

use blog_core::domain::{NewBlogPost, PostChanges, ensure_ids_match};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid post id: {}", raw)))
}

/// `null` counts as absent; any other non-string value is rejected by name.
fn text_field(name: &str, value: Option<Value>) -> AppResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(AppError::BadRequest(format!("`{}` must be a string", name))),
    }
}

fn missing_post(id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: ENTITY,
            id,
        }
        .into(),
        other => other.into(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(|p| p.serialize()).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })?;

    Ok(HttpResponse::Ok().json(post.serialize()))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let author = text_field("author", req.author)?;
    let title = text_field("title", req.title)?;
    let new_post = NewBlogPost::new(author, title, req.content, req.created)?;

    let post = state.posts.create(new_post).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = %post.id, "Created post");

    Ok(HttpResponse::Created().json(post.serialize()))
}

/// PUT /posts/{id} - only fields present in the body are changed.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let req = body.into_inner();
    ensure_ids_match(id, req.id.as_deref())?;

    let changes = PostChanges::new(req.author, req.title, req.content)?;
    tracing::debug!(post_id = %id, fields = ?changes.fields(), "Updating post");

    state
        .posts
        .update_by_id(id, changes)
        .await
        .map_err(missing_post(id))?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id} - succeeds whether or not the post existed.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let existed = state.posts.delete_by_id(id).await?;
    tracing::debug!(post_id = %id, existed, "Deleted post");

    Ok(HttpResponse::NoContent().finish())
}
