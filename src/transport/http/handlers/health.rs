use crate::transport::http::types::{AppState, HealthBody};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy (store reachable)", body = HealthBody),
        (status = 503, description = "Service is unhealthy (store unreachable)", body = HealthBody)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.todo_service.health().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthBody {
                status: "ok".to_string(),
                error: None,
            }),
        ),
        Err(e) => {
            log::warn!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody {
                    status: "unhealthy".to_string(),
                    error: Some(format!("store ping failed: {}", e)),
                }),
            )
        }
    }
}
