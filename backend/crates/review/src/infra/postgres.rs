//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{BookId, ReviewId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::book_rating::{BookRating, BookRatingTotals};
use crate::domain::entity::review::Review;
use crate::domain::repository::{RatingRepository, ReviewRepository};
use crate::domain::value_object::{rating::Rating, review_text::ReviewText};
use crate::error::{ReviewError, ReviewResult};

/// Columns of a review joined with its owner's user name
const REVIEW_SELECT: &str = r#"
    SELECT
        r.review_id,
        r.user_id,
        u.user_name,
        r.title,
        r.author,
        r.body,
        r.rating,
        r.created_at,
        r.updated_at
    FROM reviews r
    JOIN users u ON u.user_id = r.user_id
"#;

/// PostgreSQL-backed review and rating repository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Review Repository Implementation
// ============================================================================

impl ReviewRepository for PgReviewRepository {
    async fn create(&self, review: &Review) -> ReviewResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reviews (
                review_id,
                user_id,
                title,
                author,
                body,
                rating,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.user_id.as_uuid())
        .bind(review.title.as_str())
        .bind(review.author.as_str())
        .bind(review.body.as_str())
        .bind(i16::from(review.rating))
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, review_id: &ReviewId) -> ReviewResult<Option<Review>> {
        let sql = format!("{REVIEW_SELECT} WHERE r.review_id = $1");
        let row = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(review_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.into_review()).transpose()
    }

    async fn list_page(&self, offset: u64, limit: u32) -> ReviewResult<Vec<Review>> {
        let sql = format!(
            "{REVIEW_SELECT} ORDER BY r.created_at DESC, r.review_id DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(i64::from(limit))
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(|r| r.into_review()).collect()
    }

    async fn list_by_owner(&self, user_id: &UserId) -> ReviewResult<Vec<Review>> {
        let sql = format!(
            "{REVIEW_SELECT} WHERE r.user_id = $1 ORDER BY r.created_at DESC, r.review_id DESC"
        );
        let rows = sqlx::query_as::<_, ReviewRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(|r| r.into_review()).collect()
    }

    async fn update(&self, review: &Review) -> ReviewResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE reviews SET
                title = $2,
                author = $3,
                body = $4,
                rating = $5,
                updated_at = $6
            WHERE review_id = $1
            "#,
        )
        .bind(review.review_id.as_uuid())
        .bind(review.title.as_str())
        .bind(review.author.as_str())
        .bind(review.body.as_str())
        .bind(i16::from(review.rating))
        .bind(review.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound("Review"));
        }

        Ok(())
    }

    async fn delete(&self, review_id: &ReviewId) -> ReviewResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id.as_uuid())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound("Review"));
        }

        Ok(())
    }
}

// ============================================================================
// Rating Repository Implementation
// ============================================================================

impl RatingRepository for PgReviewRepository {
    async fn upsert(&self, rating: &BookRating) -> ReviewResult<()> {
        sqlx::query(
            r#"
            INSERT INTO book_ratings (
                user_id,
                book_id,
                rating,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, book_id) DO UPDATE SET
                rating = EXCLUDED.rating,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(rating.user_id.as_uuid())
        .bind(rating.book_id.as_uuid())
        .bind(i16::from(rating.rating))
        .bind(rating.created_at)
        .bind(rating.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> ReviewResult<Vec<BookRating>> {
        let rows = sqlx::query_as::<_, BookRatingRow>(
            r#"
            SELECT
                user_id,
                book_id,
                rating,
                created_at,
                updated_at
            FROM book_ratings
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_book_rating()).collect()
    }

    async fn exists_for_book(&self, book_id: &BookId) -> ReviewResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM book_ratings WHERE book_id = $1)")
                .bind(book_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn totals_by_book(&self) -> ReviewResult<Vec<BookRatingTotals>> {
        let rows = sqlx::query_as::<_, TotalsRow>(
            r#"
            SELECT
                book_id,
                SUM(rating)::BIGINT AS sum,
                COUNT(*) AS count
            FROM book_ratings
            GROUP BY book_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| BookRatingTotals {
                book_id: BookId::from_uuid(r.book_id),
                sum: r.sum,
                count: r.count,
            })
            .collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ReviewRow {
    review_id: Uuid,
    user_id: Uuid,
    user_name: String,
    title: String,
    author: String,
    body: String,
    rating: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> ReviewResult<Review> {
        let rating = Rating::try_from(self.rating)
            .map_err(|_| ReviewError::Internal(format!("Invalid stored rating: {}", self.rating)))?;

        Ok(Review {
            review_id: ReviewId::from_uuid(self.review_id),
            user_id: UserId::from_uuid(self.user_id),
            user_name: self.user_name,
            title: ReviewText::from_trusted(self.title),
            author: ReviewText::from_trusted(self.author),
            body: ReviewText::from_trusted(self.body),
            rating,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BookRatingRow {
    user_id: Uuid,
    book_id: Uuid,
    rating: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BookRatingRow {
    fn into_book_rating(self) -> ReviewResult<BookRating> {
        let rating = Rating::try_from(self.rating)
            .map_err(|_| ReviewError::Internal(format!("Invalid stored rating: {}", self.rating)))?;

        Ok(BookRating {
            user_id: UserId::from_uuid(self.user_id),
            book_id: BookId::from_uuid(self.book_id),
            rating,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TotalsRow {
    book_id: Uuid,
    sum: i64,
    count: i64,
}
