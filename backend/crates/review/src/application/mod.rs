//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod create_review;
pub mod delete_review;
pub mod list_reviews;
pub mod rate_book;
pub mod rating_summary;
pub mod update_review;

// Re-exports
pub use config::ReviewConfig;
pub use create_review::{CreateReviewInput, CreateReviewUseCase};
pub use delete_review::DeleteReviewUseCase;
pub use list_reviews::{ListReviewsUseCase, PageNumber};
pub use rate_book::{RateBookInput, RateBookUseCase};
pub use rating_summary::RatingSummaryUseCase;
pub use update_review::{UpdateReviewInput, UpdateReviewUseCase};
