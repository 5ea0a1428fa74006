//! Review model: a single user rating plus comment attached to one game.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// Maximum comment length, in characters.
pub const MAX_COMMENT_LENGTH: usize = 500;

/// Returned when a raw value falls outside `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingOutOfRange(pub i64);

/// A rating value, always within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub fn get(self) -> u8 {
        self.0
    }

    /// All rating values, lowest first.
    pub fn all() -> impl Iterator<Item = Rating> {
        (MIN_RATING..=MAX_RATING).map(Rating)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if (MIN_RATING..=MAX_RATING).contains(&v) => Ok(Self(v)),
            _ => Err(RatingOutOfRange(value)),
        }
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review record.
///
/// Reviews are only built after the acceptance checks in
/// [`crate::review::ReviewForm`] pass, and are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Username of the reviewer.
    pub author: String,

    pub rating: Rating,

    /// Free text, at most `MAX_COMMENT_LENGTH` characters.
    pub comment: String,
}

impl Review {
    pub fn new(author: impl Into<String>, rating: Rating, comment: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            rating,
            comment: comment.into(),
        }
    }
}
