//! # HTTP API Errors
//!
//! Error types for the search API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::db::DbError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
///
/// Every datastore failure surfaces the same way: HTTP 500 with the
/// failure text in the body. Connection and query errors are not
/// distinguished for the caller.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Datastore operation failed (config, connection, or query)
    #[error("{0}")]
    Datastore(#[from] DbError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Datastore(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(DbError::ConnectionError("refused".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(DbError::QueryError("bad relation".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_detail_carries_failure_text() {
        let err = ApiError::from(DbError::QueryError("relation does not exist".to_string()));
        let body = ErrorResponse::from(err);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["detail"], "Query error: relation does not exist");
    }
}
