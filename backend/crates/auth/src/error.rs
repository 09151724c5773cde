//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or unacceptable signup/login input
    #[error("{0}")]
    Validation(String),

    /// User name already exists
    #[error("Username taken")]
    UserNameTaken,

    /// Unknown user name or wrong password (never distinguished)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Unauthorized")]
    Unauthorized,

    /// Token malformed, badly signed, expired, or foreign
    #[error("Invalid token")]
    InvalidToken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// "Missing fields" validation error, as reported for empty input
    pub fn missing_fields() -> Self {
        AuthError::Validation("Missing fields".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) | AuthError::UserNameTaken => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::Unauthorized | AuthError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) | AuthError::UserNameTaken => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::Unauthorized | AuthError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::Missing => AuthError::Unauthorized,
            BearerError::Malformed => AuthError::InvalidToken,
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(msg) => AuthError::Internal(msg),
            _ => AuthError::InvalidToken,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::missing_fields().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::UserNameTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bearer_errors() {
        assert!(matches!(
            AuthError::from(BearerError::Missing),
            AuthError::Unauthorized
        ));
        assert!(matches!(
            AuthError::from(BearerError::Malformed),
            AuthError::InvalidToken
        ));
    }

    #[test]
    fn test_token_errors() {
        assert!(matches!(
            AuthError::from(TokenError::Expired),
            AuthError::InvalidToken
        ));
        assert!(matches!(
            AuthError::from(TokenError::Signing("no key".into())),
            AuthError::Internal(_)
        ));
    }

    #[test]
    fn test_internal_detail_is_masked() {
        let app_err = AppError::from(AuthError::Internal("argon2 exploded".into()));
        assert_eq!(app_err.public_message(), "Internal server error");
    }
}
