//! Rate Book Use Case
//!
//! Records the caller's rating of a book, replacing any earlier rating by
//! the same caller for the same book.

use std::sync::Arc;

use kernel::id::{BookId, ReviewId};
use kernel::identity::Identity;

use crate::domain::entity::book_rating::BookRating;
use crate::domain::repository::{RatingRepository, ReviewRepository};
use crate::domain::value_object::rating::Rating;
use crate::error::{ReviewError, ReviewResult};

/// Rate book input
#[derive(Debug, Clone, Default)]
pub struct RateBookInput {
    pub book_id: Option<String>,
    pub rating: Option<i64>,
}

/// Rate book use case
pub struct RateBookUseCase<R>
where
    R: ReviewRepository + RatingRepository,
{
    repo: Arc<R>,
}

impl<R> RateBookUseCase<R>
where
    R: ReviewRepository + RatingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &Identity, input: RateBookInput) -> ReviewResult<()> {
        let (Some(book_id), Some(rating)) = (input.book_id, input.rating) else {
            return Err(ReviewError::missing_fields());
        };

        let rating = Rating::new(rating)?;
        let review_id: ReviewId = book_id
            .trim()
            .parse()
            .map_err(|_| ReviewError::Validation("Invalid bookId".to_string()))?;

        // A book is known through the review that introduced it, or through
        // ratings that outlived that review
        let book_id = BookId::from(review_id);
        if self.repo.find_by_id(&review_id).await?.is_none()
            && !self.repo.exists_for_book(&book_id).await?
        {
            return Err(ReviewError::NotFound("Book"));
        }

        self.repo
            .upsert(&BookRating::new(identity.user_id, book_id, rating))
            .await?;

        tracing::info!(
            book_id = %book_id,
            user_id = %identity.user_id,
            rating = rating.value(),
            "Rating saved"
        );

        Ok(())
    }
}
