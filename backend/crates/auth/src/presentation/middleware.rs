//! Auth Middleware
//!
//! Gate for protected routes. Resolves the bearer token into an
//! [`Identity`](kernel::identity::Identity) and stores it in the request
//! extensions; handlers read it back with `Extension<Identity>`. Any
//! failure short-circuits the request.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::AuthorizeUseCase;
use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenService>,
}

impl AuthMiddlewareState {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_identity(
    State(state): State<AuthMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = AuthorizeUseCase::new(state.tokens.clone()).execute(req.headers())?;

    tracing::debug!(user_id = %identity.user_id, "Request authorized");

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
