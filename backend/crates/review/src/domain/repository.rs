//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{BookId, ReviewId, UserId};

use crate::domain::entity::book_rating::{BookRating, BookRatingTotals};
use crate::domain::entity::review::Review;
use crate::error::ReviewResult;

/// Review repository trait
///
/// Every listing is ordered newest first (`created_at` descending, ties
/// broken by id).
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// Persist a new review
    async fn create(&self, review: &Review) -> ReviewResult<()>;

    /// Find review by ID
    async fn find_by_id(&self, review_id: &ReviewId) -> ReviewResult<Option<Review>>;

    /// One page of all reviews
    async fn list_page(&self, offset: u64, limit: u32) -> ReviewResult<Vec<Review>>;

    /// All reviews of one owner, unpaginated
    async fn list_by_owner(&self, user_id: &UserId) -> ReviewResult<Vec<Review>>;

    /// Overwrite the mutable fields of an existing review
    ///
    /// Fails with `NotFound` if the review no longer exists.
    async fn update(&self, review: &Review) -> ReviewResult<()>;

    /// Delete review
    ///
    /// Fails with `NotFound` if the review no longer exists.
    async fn delete(&self, review_id: &ReviewId) -> ReviewResult<()>;
}

/// Book rating repository trait
#[trait_variant::make(RatingRepository: Send)]
pub trait LocalRatingRepository {
    /// Insert or overwrite the rating for `(user_id, book_id)` atomically
    async fn upsert(&self, rating: &BookRating) -> ReviewResult<()>;

    /// All ratings by one user (one per book)
    async fn list_by_user(&self, user_id: &UserId) -> ReviewResult<Vec<BookRating>>;

    /// Whether anyone has rated the book
    async fn exists_for_book(&self, book_id: &BookId) -> ReviewResult<bool>;

    /// Sum and count of ratings, grouped by book
    async fn totals_by_book(&self) -> ReviewResult<Vec<BookRatingTotals>>;
}
