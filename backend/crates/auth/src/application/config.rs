//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::crypto::{SECRET_LEN, random_secret};

/// Default issuer written into every access token
pub const DEFAULT_TOKEN_ISSUER: &str = "book-reviews";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing key for access tokens (32 bytes)
    pub token_secret: [u8; SECRET_LEN],
    /// Access token lifetime (24 hours)
    pub token_ttl: Duration,
    /// `iss` claim written and required on every token
    pub token_issuer: String,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; SECRET_LEN],
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            token_issuer: DEFAULT_TOKEN_ISSUER.to_string(),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Longest token lifetime accepted from configuration (one year)
    pub const MAX_TOKEN_TTL: Duration = Duration::from_secs(366 * 24 * 3600);

    /// Create config with the given signing secret
    pub fn from_secret(token_secret: [u8; SECRET_LEN]) -> Self {
        Self {
            token_secret,
            ..Default::default()
        }
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self::from_secret(random_secret())
    }

    /// Override the token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("token_issuer", &self.token_issuer)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
