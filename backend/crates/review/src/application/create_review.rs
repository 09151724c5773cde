//! Create Review Use Case

use std::sync::Arc;

use kernel::id::ReviewId;
use kernel::identity::Identity;

use crate::domain::entity::review::Review;
use crate::domain::repository::ReviewRepository;
use crate::domain::value_object::{
    rating::Rating,
    review_text::{ReviewText, TextField},
};
use crate::error::{ReviewError, ReviewResult};

/// Create review input (all fields required)
#[derive(Debug, Clone, Default)]
pub struct CreateReviewInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub rating: Option<i64>,
}

/// Create review use case
pub struct CreateReviewUseCase<R>
where
    R: ReviewRepository,
{
    repo: Arc<R>,
}

impl<R> CreateReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        input: CreateReviewInput,
    ) -> ReviewResult<ReviewId> {
        let (Some(title), Some(author), Some(body), Some(rating)) =
            (input.title, input.author, input.body, input.rating)
        else {
            return Err(ReviewError::missing_fields());
        };

        let review = Review::new(
            identity,
            ReviewText::new(TextField::Title, title)?,
            ReviewText::new(TextField::Author, author)?,
            ReviewText::new(TextField::Body, body)?,
            Rating::new(rating)?,
        );

        self.repo.create(&review).await?;

        tracing::info!(
            review_id = %review.review_id,
            user_id = %identity.user_id,
            "Review created"
        );

        Ok(review.review_id)
    }
}
