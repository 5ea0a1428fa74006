//! Application error types.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::review::ValidationError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal error")]
    Internal(#[from] anyhow::Error),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    InvalidQuery(#[from] CatalogError),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

impl AppError {
    /// HTTP-equivalent status for whichever outer layer surfaces the error.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Internal(_) => 500,
            AppError::NotFound => 404,
            AppError::InvalidQuery(_) => 400,
            AppError::Validation(_) => 422,
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::NotFound.status_code(), 404);
        assert_eq!(
            AppError::from(CatalogError::InvalidQuery { unknown: vec![9] }).status_code(),
            400
        );
        assert_eq!(AppError::Validation(vec![]).status_code(), 422);
        assert_eq!(AppError::from(anyhow::anyhow!("boom")).status_code(), 500);
    }

    #[test]
    fn validation_message_lists_errors() {
        let err = AppError::Validation(vec![
            ValidationError::field("rating", "rating is required"),
            ValidationError::form("already reviewed"),
        ]);
        assert_eq!(
            err.to_string(),
            "validation failed: rating: rating is required; already reviewed"
        );
    }

    #[test]
    fn invalid_query_is_transparent() {
        let err = AppError::from(CatalogError::InvalidQuery { unknown: vec![999] });
        assert_eq!(err.to_string(), "invalid query: unknown tag ids [999]");
    }
}
