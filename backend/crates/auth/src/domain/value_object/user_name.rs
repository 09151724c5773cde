//! User Name Value Object
//!
//! ユーザー名はログインと表示に使う公開識別子。
//!
//! ## 不変条件
//! - 空文字・空白のみは不可
//! - 長さ: 1〜64文字（Unicode コードポイント数）
//! - 制御文字を含まない
//! - 大文字小文字を区別し、入力されたまま保存する（正規化しない）

use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Validated user name
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate and wrap a user name
    pub fn new(raw: impl Into<String>) -> AuthResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(AuthError::missing_fields());
        }

        let char_count = raw.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "Username must be at most {} characters (got {})",
                USER_NAME_MAX_LENGTH, char_count
            )));
        }

        if raw.chars().any(char::is_control) {
            return Err(AuthError::Validation(
                "Username contains invalid characters".to_string(),
            ));
        }

        Ok(Self(raw))
    }

    /// Restore from storage without re-validating
    pub(crate) fn from_trusted(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_name() {
        let name = UserName::new("alice").unwrap();
        assert_eq!(name.as_str(), "alice");
    }

    #[test]
    fn test_case_is_preserved() {
        let upper = UserName::new("Alice").unwrap();
        let lower = UserName::new("alice").unwrap();
        assert_eq!(upper.as_str(), "Alice");
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_empty_is_missing_field() {
        assert!(matches!(
            UserName::new(""),
            Err(AuthError::Validation(msg)) if msg == "Missing fields"
        ));
        assert!(matches!(UserName::new("   "), Err(AuthError::Validation(_))));
    }

    #[test]
    fn test_too_long() {
        let long = "x".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(UserName::new(long), Err(AuthError::Validation(_))));

        let max = "x".repeat(USER_NAME_MAX_LENGTH);
        assert!(UserName::new(max).is_ok());
    }

    #[test]
    fn test_control_characters() {
        assert!(matches!(
            UserName::new("bob\u{0007}"),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_unicode_name() {
        assert!(UserName::new("読書家").is_ok());
    }
}
