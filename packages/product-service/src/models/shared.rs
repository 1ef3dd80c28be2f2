use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Escape LIKE wildcard characters in a search string.
pub fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Serialize a response envelope.
///
/// Serialization happens here instead of inside `axum::Json` so a failure maps
/// to `AppError::ResponseSerialization` and its fixed message.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response, AppError> {
    let bytes =
        serde_json::to_vec(body).map_err(|e| AppError::ResponseSerialization(e.to_string()))?;
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    )
        .into_response())
}
