//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{blogs, entries, health};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted outside the versioned prefix)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(blog_routes()).merge(entry_routes())
}

/// Blog routes
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(blogs::create_blog))
        .route("/blogs", get(blogs::list_blogs))
        .route("/blogs/:blog_id", get(blogs::get_blog))
        .route("/blogs/:blog_id", put(blogs::update_blog))
        .route("/blogs/:blog_id", delete(blogs::delete_blog))
        .route("/blogs/:blog_id/entries", get(blogs::list_blog_entries))
}

/// Entry routes
///
/// Create and update both take the full entry body; update carries the
/// entry ID in the body rather than the path.
fn entry_routes() -> Router<AppState> {
    Router::new()
        .route("/entries", post(entries::create_entry))
        .route("/entries", put(entries::update_entry))
        .route("/entries", get(entries::list_entries))
        .route("/entries/:entry_id", get(entries::get_entry))
        .route("/entries/:entry_id", delete(entries::delete_entry))
}
