//! Rating Value Object
//!
//! 星評価。1〜5 の整数のみ。

use serde::Serialize;
use std::fmt;

use crate::error::{ReviewError, ReviewResult};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Star rating in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> ReviewResult<Self> {
        if (MIN_RATING as i64..=MAX_RATING as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ReviewError::invalid_rating())
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i16> for Rating {
    type Error = ReviewError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value as i64)
    }
}

impl From<Rating> for i16 {
    fn from(rating: Rating) -> Self {
        rating.0 as i16
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
