//! Compact Signed Tokens
//!
//! HS256-signed JWTs. This module only knows how to sign and check
//! claims; what the claims mean is up to the caller.
//!
//! ## Verification rules
//! - Algorithm is pinned to HS256 (no `alg: none`, no algorithm switching)
//! - `exp` is required and enforced with zero leeway
//! - `iss` must match the configured issuer

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::crypto::SECRET_LEN;

/// Token signing/verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a compact JWS, bad base64, or claims of the wrong shape
    #[error("Token is malformed")]
    Malformed,

    /// Signature does not validate against the secret
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// `exp` is in the past
    #[error("Token has expired")]
    Expired,

    /// Issuer or algorithm do not match
    #[error("Token was not issued by this service")]
    WrongIssuer,

    /// Signing failed
    #[error("Token signing failed: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            JwtErrorKind::InvalidIssuer | JwtErrorKind::InvalidAlgorithm => {
                TokenError::WrongIssuer
            }
            _ => TokenError::Malformed,
        }
    }
}

/// HS256 token codec bound to one secret and issuer
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &[u8; SECRET_LEN], issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign claims into a compact token
    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Check signature, issuer and expiry, then return the claims
    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        let data = jsonwebtoken::decode::<C>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &"HS256")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
        iss: String,
        exp: i64,
    }

    fn claims(iss: &str, exp: i64) -> TestClaims {
        TestClaims {
            sub: "user-1".to_string(),
            iss: iss.to_string(),
            exp,
        }
    }

    fn in_one_hour() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_encode_decode() {
        let codec = TokenCodec::new(&[1u8; 32], "reviews");
        let original = claims("reviews", in_one_hour());

        let token = codec.encode(&original).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded: TestClaims = codec.decode(&token).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_wrong_secret() {
        let signer = TokenCodec::new(&[1u8; 32], "reviews");
        let verifier = TokenCodec::new(&[2u8; 32], "reviews");

        let token = signer.encode(&claims("reviews", in_one_hour())).unwrap();
        let result = verifier.decode::<TestClaims>(&token);
        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_expired() {
        let codec = TokenCodec::new(&[1u8; 32], "reviews");
        let past = chrono::Utc::now().timestamp() - 10;

        let token = codec.encode(&claims("reviews", past)).unwrap();
        assert_eq!(
            codec.decode::<TestClaims>(&token),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_wrong_issuer() {
        let codec = TokenCodec::new(&[1u8; 32], "reviews");
        let token = codec.encode(&claims("someone-else", in_one_hour())).unwrap();
        assert_eq!(
            codec.decode::<TestClaims>(&token),
            Err(TokenError::WrongIssuer)
        );
    }

    #[test]
    fn test_malformed() {
        let codec = TokenCodec::new(&[1u8; 32], "reviews");
        assert_eq!(
            codec.decode::<TestClaims>("definitely-not-a-jwt"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_tampered_payload() {
        let codec = TokenCodec::new(&[1u8; 32], "reviews");
        let token = codec.encode(&claims("reviews", in_one_hour())).unwrap();

        // Swap the payload for one signed under another key
        let other = TokenCodec::new(&[9u8; 32], "reviews")
            .encode(&TestClaims {
                sub: "user-2".to_string(),
                iss: "reviews".to_string(),
                exp: in_one_hour(),
            })
            .unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

        assert_eq!(
            codec.decode::<TestClaims>(&forged),
            Err(TokenError::InvalidSignature)
        );
    }
}
