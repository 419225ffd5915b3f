use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use shared::Assignment;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::{AssignmentPayload, JsonBody};
use crate::AppState;

pub const SERVICE_NAME: &str = "assignments-api";

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "service": SERVICE_NAME,
                "version": env!("CARGO_PKG_VERSION"),
                "database": "connected"
            })),
        ),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "service": SERVICE_NAME,
                    "version": env!("CARGO_PKG_VERSION"),
                    "database": "disconnected"
                })),
            )
        }
    }
}

pub async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assignment>>, ApiError> {
    let assignments = state.store.list().await?;
    Ok(Json(assignments))
}

pub async fn add_assignment(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AssignmentPayload>,
) -> Result<StatusCode, ApiError> {
    let document = payload.into_document()?;
    let created = state.store.insert(document).await?;

    info!(
        id = %created.id,
        title = %created.title,
        course = %created.course,
        due = %created.due,
        "Assignment created"
    );

    Ok(StatusCode::CREATED)
}

pub async fn delete_assignment(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AssignmentPayload>,
) -> Result<StatusCode, ApiError> {
    let key = payload.key()?;
    let removed = state.store.delete(&key).await?;

    info!(
        title = %key.title,
        course = %key.course,
        due = %key.due,
        removed,
        "Assignment delete"
    );

    Ok(StatusCode::OK)
}

pub async fn change_assignment_status(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AssignmentPayload>,
) -> Result<StatusCode, ApiError> {
    let (key, done) = payload.into_status_change()?;
    let matched = state.store.set_done(&key, done).await?;

    info!(
        title = %key.title,
        course = %key.course,
        due = %key.due,
        done,
        matched,
        "Assignment status change"
    );

    Ok(StatusCode::OK)
}
