//! In-Memory Repository Implementation
//!
//! Backs the test-suite and the no-database development mode. Holds the
//! same invariants as the PostgreSQL store: user names are unique and
//! compared exactly.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// In-memory auth repository, keyed by user name
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        if users.contains_key(user.user_name.as_str()) {
            return Err(AuthError::UserNameTaken);
        }

        users.insert(user.user_name.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_name.as_str()).cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self.users.read().await.contains_key(user_name.as_str()))
    }
}
