//! Rating Summary Use Case
//!
//! Read side of ratings: the caller's own ratings, and community averages.
//! Averages are recomputed from the store on every call, so a rating is
//! visible as soon as `rate` returns.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::BookId;
use kernel::identity::Identity;

use crate::domain::repository::RatingRepository;
use crate::domain::value_object::{average_rating::AverageRating, rating::Rating};
use crate::error::ReviewResult;

/// Rating summary use case
pub struct RatingSummaryUseCase<R>
where
    R: RatingRepository,
{
    repo: Arc<R>,
}

impl<R> RatingSummaryUseCase<R>
where
    R: RatingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Book → rating for every book the caller has rated
    pub async fn user_ratings(&self, identity: &Identity) -> ReviewResult<BTreeMap<BookId, Rating>> {
        let ratings = self.repo.list_by_user(&identity.user_id).await?;

        Ok(ratings
            .into_iter()
            .map(|r| (r.book_id, r.rating))
            .collect())
    }

    /// Book → average rating over all users
    pub async fn averages(&self) -> ReviewResult<BTreeMap<BookId, AverageRating>> {
        let totals = self.repo.totals_by_book().await?;

        Ok(totals
            .into_iter()
            .filter_map(|t| AverageRating::from_sum_count(t.sum, t.count).map(|avg| (t.book_id, avg)))
            .collect())
    }
}
