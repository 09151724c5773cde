//! Average Rating Value Object
//!
//! Mean of a book's ratings, fixed to two decimals. Kept as integer
//! hundredths so the aggregation never goes through floating point.
//!
//! ## 丸め
//! - 小数第3位で四捨五入（half-up）
//! - JSON では `"4.00"` のような文字列として出力する

use serde::{Serialize, Serializer};
use std::fmt;

/// Average rating in hundredths (`400` is `4.00`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AverageRating(u32);

impl AverageRating {
    /// Mean of `count` ratings summing to `sum`, rounded half-up
    ///
    /// Returns `None` when there are no ratings.
    pub fn from_sum_count(sum: i64, count: i64) -> Option<Self> {
        if count <= 0 || sum < 0 {
            return None;
        }

        // round(sum / count, 2) == floor((200 * sum + count) / (2 * count)) / 100
        let hundredths = (sum * 200 + count) / (2 * count);
        u32::try_from(hundredths).ok().map(Self)
    }

    pub fn hundredths(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for AverageRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
