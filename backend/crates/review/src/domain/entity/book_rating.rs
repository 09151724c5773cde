//! Book Rating Entity
//!
//! One user's rating of one book. At most one exists per
//! `(user_id, book_id)`; rating again overwrites it.

use chrono::{DateTime, Utc};
use kernel::id::{BookId, UserId};

use crate::domain::value_object::rating::Rating;

/// Book rating entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRating {
    pub user_id: UserId,
    pub book_id: BookId,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookRating {
    pub fn new(user_id: UserId, book_id: BookId, rating: Rating) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            book_id,
            rating,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Rating totals for one book, as grouped by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookRatingTotals {
    pub book_id: BookId,
    pub sum: i64,
    pub count: i64,
}
