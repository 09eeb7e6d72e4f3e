use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::middleware::{ApiError, ApiResult},
    bootstrap::AppState,
    models::*,
};

/// POST /api/tags - Create a new tag
pub async fn create_tag(
    State(state): State<AppState>,
    Json(req): Json<CreateTagRequest>,
) -> ApiResult<(StatusCode, Json<TagResponse>)> {
    req.validate().map_err(ApiError::BadRequest)?;

    let tag = state.tag_service.create_tag(req).await?;

    Ok((StatusCode::CREATED, Json(TagResponse::from(tag))))
}

/// GET /api/tags - List all tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<Vec<TagResponse>>> {
    let tags = state.tag_service.list_tags().await?;

    let responses: Vec<TagResponse> = tags.into_iter().map(TagResponse::from).collect();

    Ok(Json(responses))
}

/// GET /api/tags/:id - Tag detail with the bookmarks carrying it
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> ApiResult<Json<TagDetailResponse>> {
    let (tag, bookmarks) = state.tag_service.get_tag_with_bookmarks(&tag_id).await?;

    Ok(Json(TagDetailResponse::from_parts(tag, bookmarks)))
}

/// PATCH /api/tags/:id - Update tag name or color
pub async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    Json(req): Json<UpdateTagRequest>,
) -> ApiResult<Json<TagResponse>> {
    req.validate().map_err(ApiError::BadRequest)?;

    let tag = state.tag_service.update_tag(&tag_id, req).await?;

    Ok(Json(TagResponse::from(tag)))
}

/// DELETE /api/tags/:id - Delete a tag, detaching it everywhere
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.tag_service.remove_tag(&tag_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
