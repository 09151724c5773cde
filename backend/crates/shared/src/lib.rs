//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed ID wrappers (users, reviews, books)
//! - The authenticated [`identity::Identity`] passed between contexts
//! - JSON/path extractors that speak the unified error format
//! - The `{"message": ...}` confirmation body
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
pub mod identity;
pub mod response;
