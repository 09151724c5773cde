//! User Entity
//!
//! A registered account. Created once at signup and never modified or
//! deleted afterwards.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::identity::Identity;

use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};

/// User entity
///
/// Holds the password hash, so it is never serialized into a response.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// User name (unique, case-sensitive)
    pub user_name: UserName,
    /// Argon2id hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }

    /// The identity this user authenticates as
    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id, self.user_name.as_str())
    }
}
