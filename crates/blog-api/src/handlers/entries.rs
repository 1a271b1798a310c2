//! Entry handlers
//!
//! Endpoints for entry CRUD. Create and update run the mood check against
//! the parent blog inside the service layer.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::{EntryRequest, EntryResponse, EntryService, PageResponse};

use crate::extractors::{Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new entry
///
/// POST /entries
pub async fn create_entry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EntryRequest>,
) -> ApiResult<Created<Json<EntryResponse>>> {
    let service = EntryService::new(state.service_context().clone());
    let response = service.create_entry(request).await?;
    Ok(Created(Json(response)))
}

/// Replace an existing entry
///
/// PUT /entries
///
/// The entry ID travels in the body, a body without one is rejected.
pub async fn update_entry(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EntryRequest>,
) -> ApiResult<Json<EntryResponse>> {
    let service = EntryService::new(state.service_context().clone());
    let response = service.update_entry(request).await?;
    Ok(Json(response))
}

/// List entries
///
/// GET /entries
pub async fn list_entries(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PageResponse<EntryResponse>>> {
    let service = EntryService::new(state.service_context().clone());
    let response = service.list_entries(page).await?;
    Ok(Json(response))
}

/// Get entry by ID
///
/// GET /entries/{entry_id}
pub async fn get_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> ApiResult<Json<EntryResponse>> {
    let entry_id = entry_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid entry_id format"))?;

    let service = EntryService::new(state.service_context().clone());
    let response = service.get_entry(entry_id).await?;
    Ok(Json(response))
}

/// Delete entry
///
/// DELETE /entries/{entry_id}
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
) -> ApiResult<NoContent> {
    let entry_id = entry_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid entry_id format"))?;

    let service = EntryService::new(state.service_context().clone());
    service.delete_entry(entry_id).await?;
    Ok(NoContent)
}
