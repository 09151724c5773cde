//! API Server
//!
//! Assembles the bounded-context routers into one application. The binary
//! (`main.rs`) adds process concerns: configuration, logging, the
//! database pool, CORS and request tracing.

pub mod config;

use std::sync::Arc;

use auth::{
    AuthConfig, AuthMiddlewareState, MemoryAuthRepository, PgAuthRepository, TokenService,
    auth_router, auth_router_generic,
};
use axum::{Json, Router, routing::get};
use review::{
    MemoryReviewRepository, PgReviewRepository, ReviewConfig, review_router,
    review_router_generic,
};
use serde::Serialize;
use sqlx::PgPool;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Mount context routers under `/api` next to `/health`
fn compose(auth: Router, reviews: Router) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", auth.merge(reviews))
}

/// Application backed by PostgreSQL
pub fn postgres_app(pool: PgPool, auth_config: AuthConfig, review_config: ReviewConfig) -> Router {
    let auth_config = Arc::new(auth_config);
    let tokens = Arc::new(TokenService::new(&auth_config));

    compose(
        auth_router(
            PgAuthRepository::new(pool.clone()),
            auth_config,
            tokens.clone(),
        ),
        review_router(
            PgReviewRepository::new(pool),
            review_config,
            AuthMiddlewareState::new(tokens),
        ),
    )
}

/// Application backed by in-memory stores (tests and local development)
pub fn in_memory_app(auth_config: AuthConfig, review_config: ReviewConfig) -> Router {
    let auth_config = Arc::new(auth_config);
    let tokens = Arc::new(TokenService::new(&auth_config));

    compose(
        auth_router_generic(MemoryAuthRepository::new(), auth_config, tokens.clone()),
        review_router_generic(
            MemoryReviewRepository::new(),
            review_config,
            AuthMiddlewareState::new(tokens),
        ),
    )
}
