use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;

use crate::error::AppError;
use crate::models::shared::json_response;
use crate::state::AppState;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    #[schema(example = "product-service-7d9f")]
    pub instance: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    operation_id = "health",
    summary = "Liveness and database reachability",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 500, description = "Database unreachable", body = String, content_type = "text/plain"),
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<Response, AppError> {
    state.db.ping().await?;
    json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "ok",
            instance: state.instance_id().to_owned(),
        },
    )
}

/// Fallback for a known path hit with the wrong method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
