//! Review submission form and its acceptance checks.
//!
//! Nothing reaches a game's review list without passing through
//! [`ReviewForm::validate`]. All problems are collected so the caller can
//! report them together.

use serde::{Deserialize, Serialize};

use crate::models::{MAX_COMMENT_LENGTH, Rating, Review, VideoGame};

/// Raw review input as submitted by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewForm {
    /// Username of the submitting user.
    pub author: String,

    pub rating: Option<i64>,

    pub comment: Option<String>,
}

impl ReviewForm {
    pub fn new(author: impl Into<String>, rating: Option<i64>, comment: Option<String>) -> Self {
        Self {
            author: author.into(),
            rating,
            comment,
        }
    }

    /// Check the submission against `game` and build the review.
    pub fn validate(&self, game: &VideoGame) -> Result<Review, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let author = self.author.trim();
        if author.is_empty() {
            errors.push(ValidationError::form("an author is required to post a review"));
        } else if game.has_review_by(author) {
            errors.push(ValidationError::form(format!(
                "'{author}' has already reviewed '{}'",
                game.title
            )));
        }

        let rating = match self.rating {
            None => {
                errors.push(ValidationError::field("rating", "rating is required"));
                None
            }
            Some(value) => match Rating::try_from(value) {
                Ok(rating) => Some(rating),
                Err(e) => {
                    errors.push(ValidationError::field("rating", e.to_string()));
                    None
                }
            },
        };

        let comment = self.comment.clone().unwrap_or_default();
        let length = comment.chars().count();
        if length > MAX_COMMENT_LENGTH {
            errors.push(ValidationError::field(
                "comment",
                format!("comment must be at most {MAX_COMMENT_LENGTH} characters, got {length}"),
            ));
        }

        match rating {
            Some(rating) if errors.is_empty() => Ok(Review::new(author, rating, comment)),
            _ => Err(errors),
        }
    }
}

/// Validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field name (None for form-level errors).
    pub field: Option<String>,

    /// Error message.
    pub message: String,
}

impl ValidationError {
    /// Create a field-level error.
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(name.into()),
            message: message.into(),
        }
    }

    /// Create a form-level error.
    pub fn form(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}
