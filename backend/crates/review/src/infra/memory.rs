//! In-Memory Repository Implementation
//!
//! Backs the test-suite and the no-database development mode. Honors the
//! same invariants as the PostgreSQL store: newest-first ordering and one
//! rating per `(user, book)`.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{BookId, ReviewId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::book_rating::{BookRating, BookRatingTotals};
use crate::domain::entity::review::Review;
use crate::domain::repository::{RatingRepository, ReviewRepository};
use crate::error::{ReviewError, ReviewResult};

/// In-memory review and rating repository
#[derive(Clone, Default)]
pub struct MemoryReviewRepository {
    reviews: Arc<RwLock<HashMap<ReviewId, Review>>>,
    ratings: Arc<RwLock<HashMap<(UserId, BookId), BookRating>>>,
}

impl MemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(reviews: &mut [Review]) {
    reviews.sort_by_key(|r| Reverse((r.created_at, r.review_id)));
}

impl ReviewRepository for MemoryReviewRepository {
    async fn create(&self, review: &Review) -> ReviewResult<()> {
        self.reviews
            .write()
            .await
            .insert(review.review_id, review.clone());
        Ok(())
    }

    async fn find_by_id(&self, review_id: &ReviewId) -> ReviewResult<Option<Review>> {
        Ok(self.reviews.read().await.get(review_id).cloned())
    }

    async fn list_page(&self, offset: u64, limit: u32) -> ReviewResult<Vec<Review>> {
        let mut all: Vec<Review> = self.reviews.read().await.values().cloned().collect();
        newest_first(&mut all);

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        Ok(all.into_iter().skip(offset).take(limit as usize).collect())
    }

    async fn list_by_owner(&self, user_id: &UserId) -> ReviewResult<Vec<Review>> {
        let mut owned: Vec<Review> = self
            .reviews
            .read()
            .await
            .values()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        newest_first(&mut owned);
        Ok(owned)
    }

    async fn update(&self, review: &Review) -> ReviewResult<()> {
        let mut reviews = self.reviews.write().await;
        let stored = reviews
            .get_mut(&review.review_id)
            .ok_or(ReviewError::NotFound("Review"))?;

        stored.title = review.title.clone();
        stored.author = review.author.clone();
        stored.body = review.body.clone();
        stored.rating = review.rating;
        stored.updated_at = review.updated_at;
        Ok(())
    }

    async fn delete(&self, review_id: &ReviewId) -> ReviewResult<()> {
        self.reviews
            .write()
            .await
            .remove(review_id)
            .map(|_| ())
            .ok_or(ReviewError::NotFound("Review"))
    }
}

impl RatingRepository for MemoryReviewRepository {
    async fn upsert(&self, rating: &BookRating) -> ReviewResult<()> {
        let mut ratings = self.ratings.write().await;

        ratings
            .entry((rating.user_id, rating.book_id))
            .and_modify(|existing| {
                existing.rating = rating.rating;
                existing.updated_at = rating.updated_at;
            })
            .or_insert_with(|| rating.clone());
        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> ReviewResult<Vec<BookRating>> {
        Ok(self
            .ratings
            .read()
            .await
            .values()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn exists_for_book(&self, book_id: &BookId) -> ReviewResult<bool> {
        Ok(self
            .ratings
            .read()
            .await
            .values()
            .any(|r| &r.book_id == book_id))
    }

    async fn totals_by_book(&self) -> ReviewResult<Vec<BookRatingTotals>> {
        let mut totals: HashMap<BookId, BookRatingTotals> = HashMap::new();

        for rating in self.ratings.read().await.values() {
            let entry = totals.entry(rating.book_id).or_insert(BookRatingTotals {
                book_id: rating.book_id,
                sum: 0,
                count: 0,
            });
            entry.sum += i64::from(rating.rating.value());
            entry.count += 1;
        }

        Ok(totals.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::rating::Rating;

    #[tokio::test]
    async fn test_upsert_keeps_one_record_per_user_and_book() {
        let repo = MemoryReviewRepository::new();
        let user = UserId::new();
        let book = BookId::new();

        repo.upsert(&BookRating::new(user, book, Rating::new(2).unwrap()))
            .await
            .unwrap();
        repo.upsert(&BookRating::new(user, book, Rating::new(5).unwrap()))
            .await
            .unwrap();

        let ratings = repo.list_by_user(&user).await.unwrap();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].rating.value(), 5);
    }

    #[tokio::test]
    async fn test_totals_group_by_book() {
        let repo = MemoryReviewRepository::new();
        let book = BookId::new();

        for value in [3, 4, 5] {
            repo.upsert(&BookRating::new(UserId::new(), book, Rating::new(value).unwrap()))
                .await
                .unwrap();
        }

        let totals = repo.totals_by_book().await.unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!((totals[0].sum, totals[0].count), (12, 3));
    }

    #[tokio::test]
    async fn test_delete_missing_review() {
        let repo = MemoryReviewRepository::new();
        assert!(matches!(
            repo.delete(&ReviewId::new()).await,
            Err(ReviewError::NotFound(_))
        ));
    }
}
