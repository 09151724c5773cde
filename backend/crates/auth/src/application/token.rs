//! Token Issuer / Verifier
//!
//! Mints and checks stateless access tokens. A token is self-contained:
//! it carries the user id and user name, so verification never touches
//! the credential store.
//!
//! ## Claims
//! - `sub`: user id (UUID)
//! - `username`: user name at signup time (user names are immutable)
//! - `iat` / `exp`: issue and expiry time (UNIX seconds)
//! - `iss`: configured issuer

use chrono::Utc;
use kernel::id::UserId;
use kernel::identity::Identity;
use platform::token::TokenCodec;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: UserId,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

impl AccessClaims {
    fn into_identity(self) -> Identity {
        Identity::new(self.sub, self.username)
    }
}

/// Issues and verifies access tokens
#[derive(Debug, Clone)]
pub struct TokenService {
    codec: TokenCodec,
    issuer: String,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            codec: TokenCodec::new(&config.token_secret, &config.token_issuer),
            issuer: config.token_issuer.clone(),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Sign a token for the given identity
    pub fn issue(&self, identity: &Identity) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: identity.user_id,
            username: identity.user_name.clone(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
            iss: self.issuer.clone(),
        };

        Ok(self.codec.encode(&claims)?)
    }

    /// Resolve a token into an identity
    ///
    /// ## Errors
    /// * `Unauthorized` - no token supplied
    /// * `InvalidToken` - malformed, badly signed, expired, or foreign token
    pub fn verify(&self, token: Option<&str>) -> AuthResult<Identity> {
        let token = token.ok_or(AuthError::Unauthorized)?;
        let claims: AccessClaims = self.codec.decode(token)?;
        Ok(claims.into_identity())
    }
}
