//! Blog handlers
//!
//! Endpoints for blog CRUD and per-blog entry listing.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{
    BlogResponse, BlogService, CreateBlogRequest, EntryResponse, EntryService, PageResponse,
    UpdateBlogRequest,
};

use crate::extractors::{Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new blog
///
/// POST /blogs
pub async fn create_blog(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBlogRequest>,
) -> ApiResult<Created<Json<BlogResponse>>> {
    let service = BlogService::new(state.service_context().clone());
    let response = service.create_blog(request).await?;
    Ok(Created(Json(response)))
}

/// List blogs
///
/// GET /blogs
pub async fn list_blogs(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<BlogResponse>>> {
    let service = BlogService::new(state.service_context().clone());
    let response = service.list_blogs(page).await?;
    Ok(Json(response))
}

/// Get blog by ID
///
/// GET /blogs/{blog_id}
pub async fn get_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> ApiResult<Json<BlogResponse>> {
    let blog_id = blog_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid blog_id format"))?;

    let service = BlogService::new(state.service_context().clone());
    let response = service.get_blog(blog_id).await?;
    Ok(Json(response))
}

/// Replace a blog
///
/// PUT /blogs/{blog_id}
pub async fn update_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBlogRequest>,
) -> ApiResult<Json<BlogResponse>> {
    let blog_id = blog_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid blog_id format"))?;

    let service = BlogService::new(state.service_context().clone());
    let response = service.update_blog(blog_id, request).await?;
    Ok(Json(response))
}

/// Delete blog
///
/// DELETE /blogs/{blog_id}
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> ApiResult<NoContent> {
    let blog_id = blog_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid blog_id format"))?;

    let service = BlogService::new(state.service_context().clone());
    service.delete_blog(blog_id).await?;
    Ok(NoContent)
}

/// List the entries of one blog
///
/// GET /blogs/{blog_id}/entries
pub async fn list_blog_entries(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<EntryResponse>>> {
    let blog_id = blog_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid blog_id format"))?;

    let service = EntryService::new(state.service_context().clone());
    let response = service.list_blog_entries(blog_id, page).await?;
    Ok(Json(response))
}
