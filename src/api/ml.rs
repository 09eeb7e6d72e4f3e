use axum::{extract::State, Json};

use crate::{bootstrap::AppState, models::MlHealthResponse};

/// GET /api/ml/health - Report whether the classifier dependency is up.
/// Always answers 200; degradation shows in the status field.
pub async fn ml_health(State(state): State<AppState>) -> Json<MlHealthResponse> {
    let status = if state.classifier.health_check().await {
        "healthy"
    } else {
        "unavailable"
    };

    Json(MlHealthResponse {
        status: status.to_string(),
    })
}
