//! Blogpost CRUD handlers.
//!
//! Each handler is a straight parse, authorize, one repository call,
//! serialize pipeline. Posts serialize with all their fields.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{Blogpost, BlogpostUpdate};
use quill_shared::dto::{CreateBlogpostRequest, UpdateBlogpostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /blogs
///
/// Public. All posts, unfiltered and unpaginated.
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blogs.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blogs/{blog_id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .blogs
        .find_by_id(path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /blogs
///
/// Requires an active session; the requester becomes the author.
pub async fn create_blog(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateBlogpostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = Blogpost::new(identity.user_id, req.title, req.body)?;
    let saved = state.blogs.insert(post).await?;

    tracing::info!(post_id = %saved.id, author = %identity.username, "Blogpost created");

    Ok(HttpResponse::Created().json(saved))
}

/// PATCH /blogs/{blog_id}
///
/// Only the author may edit. Provided fields replace the current values,
/// omitted fields stay untouched.
pub async fn update_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogpostRequest>,
) -> AppResult<HttpResponse> {
    let mut post = state
        .blogs
        .find_by_id(path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;

    if post.author != identity.user_id {
        return Err(AppError::PermissionDenied(
            "You do not have permission to edit this blog post.".to_string(),
        ));
    }

    let req = body.into_inner();
    post.apply(BlogpostUpdate {
        title: req.title,
        body: req.body,
    })?;

    let saved = state.blogs.update(post).await?;
    Ok(HttpResponse::Ok().json(saved))
}

/// DELETE /blogs/{blog_id}
///
/// The author or any superuser may delete.
pub async fn delete_blog(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state
        .blogs
        .find_by_id(path.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;

    if post.author != identity.user_id && !identity.is_superuser {
        return Err(AppError::PermissionDenied(
            "You do not have permission to delete this blog post.".to_string(),
        ));
    }

    state.blogs.delete(post.id).await?;

    tracing::info!(post_id = %post.id, "Blogpost deleted");

    Ok(HttpResponse::NoContent().finish())
}
