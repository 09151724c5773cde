//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// Credentials body shared by signup and login
///
/// Fields are optional so that an absent field is reported as
/// "Missing fields" rather than as a JSON shape error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Sign up request
pub type SignUpRequest = CredentialsRequest;

/// Login request
pub type LoginRequest = CredentialsRequest;

// ============================================================================
// Responses
// ============================================================================

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
