//! Review Text Value Object
//!
//! Free text fields of a review (title, author, body). Stored as entered;
//! only emptiness and length are checked.

use serde::Serialize;
use std::fmt;

use crate::error::{ReviewError, ReviewResult};

/// Which review field a text belongs to, with its length limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Title,
    Author,
    Body,
}

impl TextField {
    /// Maximum length in characters
    pub const fn max_length(self) -> usize {
        match self {
            TextField::Title | TextField::Author => 200,
            TextField::Body => 10_000,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Author => "author",
            TextField::Body => "review",
        }
    }
}

/// Non-empty, length-bounded text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReviewText(String);

impl ReviewText {
    pub fn new(field: TextField, raw: impl Into<String>) -> ReviewResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(ReviewError::missing_fields());
        }

        let char_count = raw.chars().count();
        if char_count > field.max_length() {
            return Err(ReviewError::Validation(format!(
                "{} must be at most {} characters",
                field.name(),
                field.max_length()
            )));
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

impl fmt::Display for ReviewText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
