//! Review Entity
//!
//! A user's review of a book. Owner and creation time are fixed at
//! creation; only the text fields and the rating can change.

use chrono::{DateTime, Utc};
use kernel::id::{ReviewId, UserId};
use kernel::identity::Identity;

use crate::domain::value_object::{rating::Rating, review_text::ReviewText};

/// Review entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub review_id: ReviewId,
    /// Owner
    pub user_id: UserId,
    /// Owner's user name (user names never change)
    pub user_name: String,
    pub title: ReviewText,
    pub author: ReviewText,
    pub body: ReviewText,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields of a review to overwrite; `None` leaves the field as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewPatch {
    pub title: Option<ReviewText>,
    pub author: Option<ReviewText>,
    pub body: Option<ReviewText>,
    pub rating: Option<Rating>,
}

impl ReviewPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.body.is_none() && self.rating.is_none()
    }
}

impl Review {
    /// Create a new review owned by `owner`
    pub fn new(
        owner: &Identity,
        title: ReviewText,
        author: ReviewText,
        body: ReviewText,
        rating: Rating,
    ) -> Self {
        let now = Utc::now();
        Self {
            review_id: ReviewId::new(),
            user_id: owner.user_id,
            user_name: owner.user_name.clone(),
            title,
            author,
            body,
            rating,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if `identity` may modify this review
    pub fn is_owned_by(&self, identity: &Identity) -> bool {
        identity.owns(&self.user_id)
    }

    /// Overwrite the fields present in `patch`
    pub fn apply(&mut self, patch: ReviewPatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::review_text::TextField;

    fn text(field: TextField, s: &str) -> ReviewText {
        ReviewText::new(field, s).unwrap()
    }

    fn dune(owner: &Identity) -> Review {
        Review::new(
            owner,
            text(TextField::Title, "Dune"),
            text(TextField::Author, "Herbert"),
            text(TextField::Body, "Spice."),
            Rating::new(5).unwrap(),
        )
    }

    #[test]
    fn test_partial_update_keeps_owner_and_created_at() {
        let owner = Identity::new(UserId::new(), "alice");
        let mut review = dune(&owner);
        let created_at = review.created_at;

        review.apply(ReviewPatch {
            rating: Some(Rating::new(3).unwrap()),
            ..Default::default()
        });

        assert_eq!(review.rating.value(), 3);
        assert_eq!(review.title.as_str(), "Dune");
        assert_eq!(review.user_id, owner.user_id);
        assert_eq!(review.created_at, created_at);
    }

    #[test]
    fn test_ownership() {
        let owner = Identity::new(UserId::new(), "alice");
        let other = Identity::new(UserId::new(), "bob");
        let review = dune(&owner);

        assert!(review.is_owned_by(&owner));
        assert!(!review.is_owned_by(&other));
    }
}
