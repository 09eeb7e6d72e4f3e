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

/// POST /api/users - Create a user
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    req.validate().map_err(ApiError::BadRequest)?;

    let user = state.user_service.create_user(req).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users - List users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users))
}

/// GET /api/users/:id - Get a user
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&user_id).await?;

    Ok(Json(user))
}

/// PATCH /api/users/:id - Update a user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    req.validate().map_err(ApiError::BadRequest)?;

    let user = state.user_service.update_user(&user_id, req).await?;

    Ok(Json(user))
}

/// DELETE /api/users/:id - Delete a user and everything they own
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.user_service.remove_user(&user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
