//! Update Review Use Case
//!
//! Partial update of a review by its owner.

use std::sync::Arc;

use kernel::id::ReviewId;
use kernel::identity::Identity;

use crate::domain::entity::review::ReviewPatch;
use crate::domain::repository::ReviewRepository;
use crate::domain::value_object::{
    rating::Rating,
    review_text::{ReviewText, TextField},
};
use crate::error::{ReviewError, ReviewResult};

/// Update review input (absent fields are left unchanged)
#[derive(Debug, Clone, Default)]
pub struct UpdateReviewInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub rating: Option<i64>,
}

impl UpdateReviewInput {
    fn into_patch(self) -> ReviewResult<ReviewPatch> {
        Ok(ReviewPatch {
            title: self
                .title
                .map(|s| ReviewText::new(TextField::Title, s))
                .transpose()?,
            author: self
                .author
                .map(|s| ReviewText::new(TextField::Author, s))
                .transpose()?,
            body: self
                .body
                .map(|s| ReviewText::new(TextField::Body, s))
                .transpose()?,
            rating: self.rating.map(Rating::new).transpose()?,
        })
    }
}

/// Update review use case
pub struct UpdateReviewUseCase<R>
where
    R: ReviewRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        identity: &Identity,
        review_id: ReviewId,
        input: UpdateReviewInput,
    ) -> ReviewResult<()> {
        let mut review = self
            .repo
            .find_by_id(&review_id)
            .await?
            .ok_or(ReviewError::NotFound("Review"))?;

        if !review.is_owned_by(identity) {
            tracing::warn!(
                review_id = %review_id,
                user_id = %identity.user_id,
                "Update of a review owned by someone else"
            );
            return Err(ReviewError::Forbidden);
        }

        let patch = input.into_patch()?;
        if patch.is_empty() {
            return Ok(());
        }

        review.apply(patch);
        self.repo.update(&review).await?;

        tracing::info!(review_id = %review_id, user_id = %identity.user_id, "Review updated");

        Ok(())
    }
}
