//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Author, BlogPost, PostUpdate};
use blog_shared::dto::{BlogPostResponse, CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

/// Serialize a post for the wire.
pub fn to_response(post: &BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.full_name(),
        created: post.created.to_rfc3339(),
    }
}

/// Blank strings count as missing.
fn required(value: Option<String>, field: &str, errors: &mut Vec<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            errors.push(format!("{} is required", field));
            String::new()
        }
    }
}

/// Check a create request and turn it into a new post.
fn validate_create(req: CreatePostRequest) -> Result<BlogPost, DomainError> {
    let mut errors = Vec::new();

    let title = required(req.title, "title", &mut errors);
    let content = required(req.content, "content", &mut errors);
    let author = req.author.unwrap_or_default();
    let first_name = required(author.first_name, "author.firstName", &mut errors);
    let last_name = required(author.last_name, "author.lastName", &mut errors);

    if !errors.is_empty() {
        return Err(DomainError::Validation(errors));
    }

    Ok(BlogPost::new(
        title,
        content,
        Author::new(first_name, last_name),
    ))
}

/// Check an update request against the path id. Fields that are present
/// must not be blank; absent fields stay unchanged.
fn validate_update(path_id: Uuid, req: UpdatePostRequest) -> Result<PostUpdate, AppError> {
    if let Some(body_id) = &req.id {
        let parsed: Uuid = body_id.parse().map_err(|_| {
            AppError::BadRequest(format!("Request body id ({}) is not a valid id", body_id))
        })?;
        if parsed != path_id {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                path_id, body_id
            )));
        }
    }

    let mut errors = Vec::new();
    let title = req.title.map(|t| required(Some(t), "title", &mut errors));
    let content = req.content.map(|c| required(Some(c), "content", &mut errors));

    if !errors.is_empty() {
        return Err(DomainError::Validation(errors).into());
    }

    Ok(PostUpdate { title, content })
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<BlogPostResponse> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = validate_create(body.into_inner())?;
    let saved = state.posts.insert(post).await?;

    tracing::info!(post_id = %saved.id, "Post created");
    Ok(HttpResponse::Created().json(to_response(&saved)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let update = validate_update(id, body.into_inner())?;

    if !state.posts.update_by_id(id, &update).await? {
        return Err(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        }
        .into());
    }

    tracing::info!(post_id = %id, "Post updated");
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    if state.posts.delete(id).await? {
        tracing::info!(post_id = %id, "Post deleted");
    } else {
        tracing::debug!(post_id = %id, "Delete of absent post");
    }

    Ok(HttpResponse::NoContent().finish())
}
