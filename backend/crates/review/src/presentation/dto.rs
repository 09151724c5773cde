//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that absent input is reported by the use
//! cases ("Missing fields") instead of as a JSON shape error.

use chrono::{DateTime, Utc};
use kernel::id::{ReviewId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{CreateReviewInput, RateBookInput, UpdateReviewInput};
use crate::domain::entity::review::Review;
use crate::domain::value_object::rating::Rating;
use crate::error::{ReviewError, ReviewResult};

/// Read a JSON rating; `null` counts as absent, non-integers are invalid
fn rating_value(raw: Option<Value>) -> ReviewResult<Option<i64>> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(ReviewError::invalid_rating),
        Some(_) => Err(ReviewError::invalid_rating()),
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Create review request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReviewRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub review: Option<String>,
    pub rating: Option<Value>,
}

impl CreateReviewRequest {
    pub fn into_input(self) -> ReviewResult<CreateReviewInput> {
        Ok(CreateReviewInput {
            title: self.title,
            author: self.author,
            body: self.review,
            rating: rating_value(self.rating)?,
        })
    }
}

/// Update review request
///
/// Any subset of the fields; unknown fields (`userId`, `createdAt`, ...)
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReviewRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub review: Option<String>,
    pub rating: Option<Value>,
}

impl UpdateReviewRequest {
    pub fn into_input(self) -> ReviewResult<UpdateReviewInput> {
        Ok(UpdateReviewInput {
            title: self.title,
            author: self.author,
            body: self.review,
            rating: rating_value(self.rating)?,
        })
    }
}

/// Rate book request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateBookRequest {
    pub book_id: Option<String>,
    pub rating: Option<Value>,
}

impl RateBookRequest {
    pub fn into_input(self) -> ReviewResult<RateBookInput> {
        Ok(RateBookInput {
            book_id: self.book_id,
            rating: rating_value(self.rating)?,
        })
    }
}

/// `?page=` query
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// A review as listed, with its owner's user name
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub title: String,
    pub author: String,
    pub review: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
    #[serde(rename = "username")]
    pub user_name: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.review_id,
            title: review.title.as_str().to_string(),
            author: review.author.as_str().to_string(),
            review: review.body.as_str().to_string(),
            rating: review.rating,
            created_at: review.created_at,
            user_id: review.user_id,
            user_name: review.user_name,
        }
    }
}
