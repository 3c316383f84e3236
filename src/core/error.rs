use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::geo::CoordinateError;
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// The client could not obtain a location (geolocation failed or lat/lng absent)
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// The data source did not answer in time; the caller may retry
    #[error("Source timeout: {0}")]
    SourceTimeout(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// Whether a repeated call has a reasonable chance of succeeding
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::SourceTimeout(_)
            | AppError::ExternalServiceError(_)
            | AppError::ServiceUnavailable(_) => true,
            // connection trouble; constraint violations and decode errors stay fatal
            AppError::Database(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::Protocol(_)
                    | sqlx::Error::WorkerCrashed
            ),
            _ => false,
        }
    }
}

impl From<CoordinateError> for AppError {
    fn from(e: CoordinateError) -> Self {
        AppError::InvalidCoordinate(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    None,
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            AppError::Validation(ref msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::InvalidCoordinate(ref msg) => (
                StatusCode::BAD_REQUEST,
                format!("Koordinat tidak valid: {}", msg),
                Some(vec![msg.clone()]),
            ),
            AppError::LocationUnavailable(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::ExternalServiceError(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone(), None)
            }
            AppError::SourceTimeout(ref msg) => {
                tracing::warn!("Source timeout: {}", msg);
                (StatusCode::GATEWAY_TIMEOUT, msg.clone(), None)
            }
            AppError::ServiceUnavailable(ref msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, msg.clone(), None)
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_maps_to_bad_request() {
        let response = AppError::InvalidCoordinate("latitude 91 out of range".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_source_failures_are_retryable() {
        assert!(AppError::SourceTimeout("slow".to_string()).is_retryable());
        assert!(AppError::ExternalServiceError("down".to_string()).is_retryable());
        assert!(!AppError::NotFound("missing".to_string()).is_retryable());
        assert!(!AppError::InvalidCoordinate("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_source_timeout_maps_to_gateway_timeout() {
        let response = AppError::SourceTimeout("slow".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_service_unavailable_maps_to_503() {
        let err = AppError::ServiceUnavailable("down".to_string());
        assert!(err.is_retryable());
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_only_connection_database_errors_are_retryable() {
        assert!(AppError::Database(sqlx::Error::PoolTimedOut).is_retryable());
        assert!(AppError::Database(sqlx::Error::PoolClosed).is_retryable());
        assert!(!AppError::Database(sqlx::Error::RowNotFound).is_retryable());
        assert!(!AppError::Database(sqlx::Error::ColumnNotFound("name".to_string())).is_retryable());
        assert!(AppError::Database(sqlx::Error::Protocol("reset".to_string())).is_retryable());
    }
}
