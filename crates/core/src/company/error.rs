//! Company error types.

use thiserror::Error;

/// Errors that can occur when registering a company.
#[derive(Debug, Error)]
pub enum CompanyError {
    /// A mandatory field is missing or blank.
    #[error("Missing mandatory field: {0}")]
    MissingField(&'static str),
}

impl CompanyError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
        }
    }
}

impl From<CompanyError> for cuadra_shared::AppError {
    fn from(err: CompanyError) -> Self {
        Self::Validation(err.to_string())
    }
}
