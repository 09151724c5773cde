//! HTTP Handlers
//!
//! Protected handlers receive the caller through `Extension<Identity>`,
//! set by `auth::require_identity`.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::{Extension, Json};
use kernel::extract::{ApiJson, ApiPath, ApiQuery};
use kernel::id::{BookId, ReviewId};
use kernel::identity::Identity;
use kernel::response::MessageResponse;

use crate::application::config::ReviewConfig;
use crate::application::{
    CreateReviewUseCase, DeleteReviewUseCase, ListReviewsUseCase, PageNumber, RateBookUseCase,
    RatingSummaryUseCase, UpdateReviewUseCase,
};
use crate::domain::entity::review::Review;
use crate::domain::repository::{RatingRepository, ReviewRepository};
use crate::domain::value_object::{average_rating::AverageRating, rating::Rating};
use crate::error::ReviewResult;
use crate::presentation::dto::{
    CreateReviewRequest, PageQuery, RateBookRequest, ReviewResponse, UpdateReviewRequest,
};

/// Shared state for review handlers
#[derive(Clone)]
pub struct ReviewAppState<R>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ReviewConfig>,
}

fn to_responses(reviews: Vec<Review>) -> Vec<ReviewResponse> {
    reviews.into_iter().map(ReviewResponse::from).collect()
}

// ============================================================================
// Reviews
// ============================================================================

/// POST /api/reviews
pub async fn create_review<R>(
    State(state): State<ReviewAppState<R>>,
    Extension(identity): Extension<Identity>,
    ApiJson(req): ApiJson<CreateReviewRequest>,
) -> ReviewResult<Json<MessageResponse>>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    CreateReviewUseCase::new(state.repo.clone())
        .execute(&identity, req.into_input()?)
        .await?;

    Ok(Json(MessageResponse::new("Review added")))
}

/// GET /api/reviews?page=N
pub async fn list_reviews<R>(
    State(state): State<ReviewAppState<R>>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ReviewResult<Json<Vec<ReviewResponse>>>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    let page = PageNumber::parse_lenient(query.page.as_deref());
    let reviews = ListReviewsUseCase::new(state.repo.clone(), state.config.clone())
        .page(page)
        .await?;

    Ok(Json(to_responses(reviews)))
}

/// GET /api/my-reviews
pub async fn my_reviews<R>(
    State(state): State<ReviewAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> ReviewResult<Json<Vec<ReviewResponse>>>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    let reviews = ListReviewsUseCase::new(state.repo.clone(), state.config.clone())
        .owned_by(&identity)
        .await?;

    Ok(Json(to_responses(reviews)))
}

/// PUT /api/reviews/{id}
pub async fn update_review<R>(
    State(state): State<ReviewAppState<R>>,
    Extension(identity): Extension<Identity>,
    ApiPath(review_id): ApiPath<ReviewId>,
    ApiJson(req): ApiJson<UpdateReviewRequest>,
) -> ReviewResult<Json<MessageResponse>>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    UpdateReviewUseCase::new(state.repo.clone())
        .execute(&identity, review_id, req.into_input()?)
        .await?;

    Ok(Json(MessageResponse::new("Review updated")))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review<R>(
    State(state): State<ReviewAppState<R>>,
    Extension(identity): Extension<Identity>,
    ApiPath(review_id): ApiPath<ReviewId>,
) -> ReviewResult<Json<MessageResponse>>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    DeleteReviewUseCase::new(state.repo.clone())
        .execute(&identity, review_id)
        .await?;

    Ok(Json(MessageResponse::new("Review deleted")))
}

// ============================================================================
// Ratings
// ============================================================================

/// POST /api/rate-book
pub async fn rate_book<R>(
    State(state): State<ReviewAppState<R>>,
    Extension(identity): Extension<Identity>,
    ApiJson(req): ApiJson<RateBookRequest>,
) -> ReviewResult<Json<MessageResponse>>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    RateBookUseCase::new(state.repo.clone())
        .execute(&identity, req.into_input()?)
        .await?;

    Ok(Json(MessageResponse::new("Rating saved")))
}

/// GET /api/user-book-ratings
pub async fn user_book_ratings<R>(
    State(state): State<ReviewAppState<R>>,
    Extension(identity): Extension<Identity>,
) -> ReviewResult<Json<BTreeMap<BookId, Rating>>>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    let ratings = RatingSummaryUseCase::new(state.repo.clone())
        .user_ratings(&identity)
        .await?;

    Ok(Json(ratings))
}

/// GET /api/book-avg-ratings
pub async fn book_avg_ratings<R>(
    State(state): State<ReviewAppState<R>>,
) -> ReviewResult<Json<BTreeMap<BookId, AverageRating>>>
where
    R: ReviewRepository + RatingRepository + Clone + Send + Sync + 'static,
{
    let averages = RatingSummaryUseCase::new(state.repo.clone()).averages().await?;

    Ok(Json(averages))
}
