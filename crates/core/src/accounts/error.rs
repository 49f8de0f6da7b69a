//! Account-type error types.

use thiserror::Error;

/// Errors that can occur when managing account types.
#[derive(Debug, Error)]
pub enum AccountTypeError {
    /// Account-type name is empty after trimming.
    #[error("Account-type name cannot be empty")]
    EmptyName,

    /// An account type with this name already exists for the company.
    #[error("Account type already exists: {0}")]
    Duplicate(String),

    /// The referenced account type does not exist.
    #[error("Unknown account type: {0}")]
    Unknown(String),
}

impl AccountTypeError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_ACCOUNT_TYPE_NAME",
            Self::Duplicate(_) => "ACCOUNT_TYPE_DUPLICATE",
            Self::Unknown(_) => "ACCOUNT_TYPE_UNKNOWN",
        }
    }
}

impl From<AccountTypeError> for cuadra_shared::AppError {
    fn from(err: AccountTypeError) -> Self {
        match err {
            AccountTypeError::EmptyName => Self::Validation(err.to_string()),
            AccountTypeError::Duplicate(_) => Self::Conflict(err.to_string()),
            AccountTypeError::Unknown(_) => Self::NotFound(err.to_string()),
        }
    }
}
