//! Delete Review Use Case

use std::sync::Arc;

use kernel::id::ReviewId;
use kernel::identity::Identity;

use crate::domain::repository::ReviewRepository;
use crate::error::{ReviewError, ReviewResult};

/// Delete review use case
///
/// Ratings that reference the review as a book are left in place.
pub struct DeleteReviewUseCase<R>
where
    R: ReviewRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteReviewUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, review_id: ReviewId) -> ReviewResult<()> {
        let review = self
            .repo
            .find_by_id(&review_id)
            .await?
            .ok_or(ReviewError::NotFound("Review"))?;

        if !review.is_owned_by(identity) {
            tracing::warn!(
                review_id = %review_id,
                user_id = %identity.user_id,
                "Delete of a review owned by someone else"
            );
            return Err(ReviewError::Forbidden);
        }

        self.repo.delete(&review_id).await?;

        tracing::info!(review_id = %review_id, user_id = %identity.user_id, "Review deleted");

        Ok(())
    }
}
