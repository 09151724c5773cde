//! Authorize Use Case
//!
//! Resolves the caller of a protected request from its `Authorization`
//! header. Used by the `require_identity` middleware.

use std::sync::Arc;

use axum::http::HeaderMap;
use kernel::identity::Identity;
use platform::bearer::{BearerError, extract_bearer};

use crate::application::token::TokenService;
use crate::error::AuthResult;

/// Authorize use case
pub struct AuthorizeUseCase {
    tokens: Arc<TokenService>,
}

impl AuthorizeUseCase {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Extract and verify the bearer token
    ///
    /// ## Errors
    /// * `Unauthorized` - no `Authorization` header or no token in it
    /// * `InvalidToken` - anything else that fails verification
    pub fn execute(&self, headers: &HeaderMap) -> AuthResult<Identity> {
        let token = match extract_bearer(headers) {
            Ok(token) => Some(token),
            Err(BearerError::Missing) => None,
            Err(e) => return Err(e.into()),
        };

        self.tokens.verify(token)
    }
}
