//! Review (Reviews & Ratings) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Review CRUD; only the owner may update or delete
//! - Newest-first listing, paginated for everyone, complete for the owner
//! - One rating per user per book (atomic upsert)
//! - Per-book average ratings, recomputed on every read
//!
//! Books are not stored on their own: a book is identified by the review
//! that introduced it (`BookId::from(ReviewId)`).

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ReviewConfig;
pub use error::{ReviewError, ReviewResult};
pub use infra::memory::MemoryReviewRepository;
pub use infra::postgres::PgReviewRepository;
pub use presentation::router::{review_router, review_router_generic};
