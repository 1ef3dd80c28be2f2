use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::category::CategoryError;
use crate::search::CriteriaError;

/// Application-level error type.
///
/// The `Display` text of each variant is the complete response body; no
/// structured error envelope is sent. Variants carrying a `String` keep the
/// underlying detail for the log only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't convert the value to a number!")]
    InvalidNumericFormat,
    #[error("Negative prices are invalid!")]
    NegativeValueRejected,
    #[error("None of the search parameters is set!")]
    NoFilterProvided,
    #[error("The ID is not set!")]
    IdentifierMissing,
    #[error("Negative IDs are invalid!")]
    IdentifierNegative,
    #[error("The product name to be searched for is empty!")]
    NameMissing,
    #[error("{0}")]
    InvalidProduct(&'static str),
    #[error("The product was not found!")]
    NotFound,
    #[error("The category does not exist!")]
    CategoryNotFound,
    #[error("Invalid Method!")]
    MethodNotAllowed,
    #[error("Couldn't unmarshall JSON into object!")]
    RequestDeserialization(String),
    #[error("Couldn't marshall object into JSON format!")]
    ResponseSerialization(String),
    #[error("The request to the category service failed to execute!")]
    CollaboratorUnreachable(String),
    #[error("Querying the database resulted in an error!")]
    Storage(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidNumericFormat
            | AppError::NegativeValueRejected
            | AppError::NoFilterProvided
            | AppError::IdentifierMissing
            | AppError::IdentifierNegative
            | AppError::NameMissing
            | AppError::InvalidProduct(_)
            | AppError::RequestDeserialization(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::CategoryNotFound => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::CollaboratorUnreachable(_) => StatusCode::BAD_GATEWAY,
            AppError::ResponseSerialization(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Storage(detail)
            | AppError::ResponseSerialization(detail)
            | AppError::CollaboratorUnreachable(detail) => {
                tracing::error!(%status, detail = %detail, "{}", self);
            }
            AppError::RequestDeserialization(detail) => {
                tracing::warn!(%status, detail = %detail, "{}", self);
            }
            _ => tracing::warn!(%status, "{}", self),
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<CriteriaError> for AppError {
    fn from(err: CriteriaError) -> Self {
        match err {
            CriteriaError::NoFilterProvided => AppError::NoFilterProvided,
            CriteriaError::InvalidNumericFormat { .. } => AppError::InvalidNumericFormat,
            CriteriaError::NegativeValueRejected { .. } => AppError::NegativeValueRejected,
        }
    }
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::Unreachable(detail) => AppError::CollaboratorUnreachable(detail),
        }
    }
}
