//! Review Error Types
//!
//! Review-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Review-specific result type alias
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Review-specific error variants
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Missing, empty, or out-of-range input
    #[error("{0}")]
    Validation(String),

    /// Referenced review or book does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Review exists but belongs to someone else
    #[error("Forbidden")]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReviewError {
    /// "Missing fields" validation error
    pub fn missing_fields() -> Self {
        ReviewError::Validation("Missing fields".to_string())
    }

    /// "Invalid rating" validation error
    pub fn invalid_rating() -> Self {
        ReviewError::Validation("Invalid rating".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReviewError::Validation(_) => StatusCode::BAD_REQUEST,
            ReviewError::NotFound(_) => StatusCode::NOT_FOUND,
            ReviewError::Forbidden => StatusCode::FORBIDDEN,
            ReviewError::Database(_) | ReviewError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReviewError::Validation(_) => ErrorKind::BadRequest,
            ReviewError::NotFound(_) => ErrorKind::NotFound,
            ReviewError::Forbidden => ErrorKind::Forbidden,
            ReviewError::Database(_) | ReviewError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            ReviewError::Database(e) => {
                tracing::error!(error = %e, "Review database error");
            }
            ReviewError::Internal(msg) => {
                tracing::error!(message = %msg, "Review internal error");
            }
            ReviewError::Forbidden => {
                tracing::warn!("Ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Review error");
            }
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}
