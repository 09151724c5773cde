//! Review Router

use auth::{AuthMiddlewareState, require_identity};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::ReviewConfig;
use crate::domain::repository::{RatingRepository, ReviewRepository};
use crate::infra::postgres::PgReviewRepository;
use crate::presentation::handlers::{self, ReviewAppState};

/// Create the Review router with PostgreSQL repository
pub fn review_router(
    repo: PgReviewRepository,
    config: ReviewConfig,
    auth: AuthMiddlewareState,
) -> Router {
    review_router_generic(repo, config, auth)
}

/// Create a generic Review router for any repository implementation
///
/// `GET /reviews` and `GET /book-avg-ratings` are public; every other
/// route goes through `require_identity`.
pub fn review_router_generic<R>(repo: R, config: ReviewConfig, auth: AuthMiddlewareState) -> Router
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    let state = ReviewAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let public = Router::new()
        .route("/reviews", get(handlers::list_reviews::<R>))
        .route("/book-avg-ratings", get(handlers::book_avg_ratings::<R>));

    let protected = Router::new()
        .route("/reviews", post(handlers::create_review::<R>))
        .route(
            "/reviews/{id}",
            put(handlers::update_review::<R>).delete(handlers::delete_review::<R>),
        )
        .route("/my-reviews", get(handlers::my_reviews::<R>))
        .route("/rate-book", post(handlers::rate_book::<R>))
        .route("/user-book-ratings", get(handlers::user_book_ratings::<R>))
        .route_layer(middleware::from_fn_with_state(auth, require_identity));

    public.merge(protected).with_state(state)
}
