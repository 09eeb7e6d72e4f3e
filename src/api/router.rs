use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::bootstrap::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        // Bookmark routes
        .route("/api/bookmarks", post(api::bookmarks::create_bookmark))
        .route("/api/bookmarks", get(api::bookmarks::list_bookmarks))
        .route("/api/bookmarks/:id", get(api::bookmarks::get_bookmark))
        .route("/api/bookmarks/:id", patch(api::bookmarks::update_bookmark))
        .route(
            "/api/bookmarks/:id",
            delete(api::bookmarks::delete_bookmark),
        )
        .route(
            "/api/bookmarks/:id/tags",
            post(api::bookmarks::add_tag_to_bookmark),
        )
        .route(
            "/api/bookmarks/:id/tags/:tag_id",
            delete(api::bookmarks::remove_tag_from_bookmark),
        )
        // Tag routes
        .route("/api/tags", post(api::tags::create_tag))
        .route("/api/tags", get(api::tags::list_tags))
        .route("/api/tags/:id", get(api::tags::get_tag))
        .route("/api/tags/:id", patch(api::tags::update_tag))
        .route("/api/tags/:id", delete(api::tags::delete_tag))
        // User routes
        .route("/api/users", post(api::users::create_user))
        .route("/api/users", get(api::users::list_users))
        .route("/api/users/:id", get(api::users::get_user))
        .route("/api/users/:id", patch(api::users::update_user))
        .route("/api/users/:id", delete(api::users::delete_user))
        // Classifier dependency health
        .route("/api/ml/health", get(api::ml::ml_health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root_handler() -> &'static str {
    "Linkstash Bookmark Manager"
}

async fn health_handler() -> &'static str {
    "OK"
}
