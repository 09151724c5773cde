//! Authenticated Identity
//!
//! The user context resolved from a verified bearer token. Produced by the
//! auth middleware, consumed by every context that scopes data by owner.

use serde::Serialize;

use crate::id::UserId;

/// Verified caller identity (user id + user name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub user_id: UserId,
    pub user_name: String,
}

impl Identity {
    pub fn new(user_id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }

    /// True if this identity owns a record with the given owner id
    pub fn owns(&self, owner_id: &UserId) -> bool {
        &self.user_id == owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owns() {
        let identity = Identity::new(UserId::new(), "alice");
        assert!(identity.owns(&identity.user_id));
        assert!(!identity.owns(&UserId::new()));
    }
}
