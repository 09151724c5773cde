//! Application Layer
//!
//! Use cases and application services.

pub mod authorize;
pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use authorize::AuthorizeUseCase;
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token::{AccessClaims, TokenService};
