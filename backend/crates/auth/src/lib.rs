//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User signup/login with username + password
//! - Stateless bearer tokens (HS256 JWT) carrying user id and user name
//! - `require_identity` middleware that resolves an [`Identity`] for
//!   protected routes in other contexts
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never returned or logged
//! - Unknown user and wrong password fail identically
//! - Tokens expire; there is no server-side revocation list

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::memory::MemoryAuthRepository;
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthMiddlewareState, require_identity};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel types shared with other contexts
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::identity::Identity;

#[cfg(test)]
mod tests;
