use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::middleware::{ApiError, ApiResult},
    bootstrap::AppState,
    models::*,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBookmarksQuery {
    pub owner_id: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub is_favorite: Option<bool>,
    pub search: Option<String>,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    20
}

/// Owner scoping for single-bookmark routes, passed as ?ownerId=...
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub owner_id: Option<String>,
}

fn require_owner(owner_id: Option<String>) -> ApiResult<String> {
    match owner_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(ApiError::BadRequest("ownerId is required".to_string())),
    }
}

/// POST /api/bookmarks - Create a bookmark (classified on the way in)
pub async fn create_bookmark(
    State(state): State<AppState>,
    Json(req): Json<CreateBookmarkRequest>,
) -> ApiResult<(StatusCode, Json<BookmarkResponse>)> {
    req.validate().map_err(ApiError::BadRequest)?;

    let bookmark = state.bookmark_service.create_bookmark(req).await?;

    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// GET /api/bookmarks - List the owner's bookmarks with optional filters
pub async fn list_bookmarks(
    State(state): State<AppState>,
    Query(params): Query<ListBookmarksQuery>,
) -> ApiResult<Json<BookmarkListResponse>> {
    let owner_id = require_owner(params.owner_id)?;

    let listing = state
        .bookmark_service
        .list_bookmarks(
            &owner_id,
            params.page,
            params.limit,
            params.category,
            params.tag,
            params.is_favorite,
            params.search,
        )
        .await?;

    Ok(Json(listing))
}

/// GET /api/bookmarks/:id - Get one bookmark
pub async fn get_bookmark(
    State(state): State<AppState>,
    Path(bookmark_id): Path<String>,
    Query(params): Query<OwnerQuery>,
) -> ApiResult<Json<BookmarkResponse>> {
    let owner_id = require_owner(params.owner_id)?;

    let bookmark = state
        .bookmark_service
        .get_bookmark(&bookmark_id, &owner_id)
        .await?;

    Ok(Json(bookmark))
}

/// PATCH /api/bookmarks/:id - Update bookmark fields
pub async fn update_bookmark(
    State(state): State<AppState>,
    Path(bookmark_id): Path<String>,
    Query(params): Query<OwnerQuery>,
    Json(req): Json<UpdateBookmarkRequest>,
) -> ApiResult<Json<BookmarkResponse>> {
    let owner_id = require_owner(params.owner_id)?;
    req.validate().map_err(ApiError::BadRequest)?;

    let bookmark = state
        .bookmark_service
        .update_bookmark(&bookmark_id, &owner_id, req)
        .await?;

    Ok(Json(bookmark))
}

/// DELETE /api/bookmarks/:id - Delete a bookmark
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(bookmark_id): Path<String>,
    Query(params): Query<OwnerQuery>,
) -> ApiResult<StatusCode> {
    let owner_id = require_owner(params.owner_id)?;

    state
        .bookmark_service
        .remove_bookmark(&bookmark_id, &owner_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/bookmarks/:id/tags - Attach a tag by name
pub async fn add_tag_to_bookmark(
    State(state): State<AppState>,
    Path(bookmark_id): Path<String>,
    Query(params): Query<OwnerQuery>,
    Json(req): Json<AddTagRequest>,
) -> ApiResult<Json<BookmarkResponse>> {
    let owner_id = require_owner(params.owner_id)?;
    req.validate().map_err(ApiError::BadRequest)?;

    let bookmark = state
        .bookmark_service
        .add_tag(&bookmark_id, &owner_id, &req.tag_name)
        .await?;

    Ok(Json(bookmark))
}

/// DELETE /api/bookmarks/:id/tags/:tag_id - Detach a tag by id
pub async fn remove_tag_from_bookmark(
    State(state): State<AppState>,
    Path((bookmark_id, tag_id)): Path<(String, String)>,
    Query(params): Query<OwnerQuery>,
) -> ApiResult<Json<BookmarkResponse>> {
    let owner_id = require_owner(params.owner_id)?;

    let bookmark = state
        .bookmark_service
        .remove_tag(&bookmark_id, &owner_id, &tag_id)
        .await?;

    Ok(Json(bookmark))
}
