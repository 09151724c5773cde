//! User Password Value Object
//!
//! Domain wrapper around `platform::password`. Maps the platform's policy
//! and hashing errors onto [`AuthError`].

use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::Empty => AuthError::missing_fields(),
            PasswordPolicyError::TooLong { .. } => AuthError::Validation(e.to_string()),
        })?;

        Ok(Self(clear_text))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password (salted Argon2id, optional pepper)
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        let hashed = raw.0.hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AuthError::Internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AuthError::Internal("Unexpected error during password hashing".to_string())
            }
        })?;

        Ok(Self(hashed))
    }

    /// Restore from a stored PHC string
    pub fn from_phc_string(phc: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// PHC string for storage
    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }

    /// [`UserPassword::from_raw`] on the blocking pool
    pub async fn hash_blocking(raw: RawPassword, pepper: Option<Vec<u8>>) -> AuthResult<Self> {
        tokio::task::spawn_blocking(move || Self::from_raw(&raw, pepper.as_deref()))
            .await
            .map_err(|e| AuthError::Internal(format!("Hashing task failed: {}", e)))?
    }

    /// [`UserPassword::verify`] on the blocking pool
    pub async fn verify_blocking(
        &self,
        raw: RawPassword,
        pepper: Option<Vec<u8>>,
    ) -> AuthResult<bool> {
        let hash = self.clone();
        tokio::task::spawn_blocking(move || hash.verify(&raw, pepper.as_deref()))
            .await
            .map_err(|e| AuthError::Internal(format!("Verification task failed: {}", e)))
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_is_missing_field() {
        assert!(matches!(
            RawPassword::new(String::new()),
            Err(AuthError::Validation(msg)) if msg == "Missing fields"
        ));
    }

    #[test]
    fn test_hash_verify() {
        let raw = RawPassword::new("correct horse".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(hashed.verify(&raw, None));

        let wrong = RawPassword::new("battery staple".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_restore_from_phc() {
        let raw = RawPassword::new("correct horse".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        let restored = UserPassword::from_phc_string(hashed.as_str()).unwrap();
        assert!(restored.verify(&raw, None));
    }

    #[tokio::test]
    async fn test_blocking_pool_hash_verify() {
        let pepper = Some(b"pepper".to_vec());
        let raw = RawPassword::new("correct horse".to_string()).unwrap();
        let hashed = UserPassword::hash_blocking(raw, pepper.clone()).await.unwrap();

        let raw = RawPassword::new("correct horse".to_string()).unwrap();
        assert!(hashed.verify_blocking(raw, pepper.clone()).await.unwrap());

        let raw = RawPassword::new("correct horse".to_string()).unwrap();
        assert!(!hashed.verify_blocking(raw, None).await.unwrap());
    }

    #[test]
    fn test_debug_does_not_leak() {
        let raw = RawPassword::new("hunter2".to_string()).unwrap();
        assert!(!format!("{:?}", raw).contains("hunter2"));
    }
}
