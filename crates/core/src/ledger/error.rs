//! Ledger error types for record validation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when validating a monthly record.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Record has no entry lines.
    #[error("Record must have at least one entry line")]
    EmptyRecord,

    /// A line has no description.
    #[error("Line {0} is missing its description")]
    MissingDescription(usize),

    /// A line has no account type.
    #[error("Line {0} is missing its account type")]
    MissingAccountType(usize),

    /// A line amount is zero or negative.
    #[error("Line {line} amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// Zero-based line index.
        line: usize,
        /// The offending amount.
        amount: Decimal,
    },

    /// Debit and credit totals differ beyond the tolerance.
    #[error("Debit and credit totals must match. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRecord => "EMPTY_RECORD",
            Self::MissingDescription(_) => "MISSING_DESCRIPTION",
            Self::MissingAccountType(_) => "MISSING_ACCOUNT_TYPE",
            Self::NonPositiveAmount { .. } => "NON_POSITIVE_AMOUNT",
            Self::Unbalanced { .. } => "UNBALANCED_RECORD",
        }
    }
}

impl From<LedgerError> for cuadra_shared::AppError {
    fn from(err: LedgerError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(LedgerError::EmptyRecord.error_code(), "EMPTY_RECORD");
        assert_eq!(
            LedgerError::Unbalanced {
                debit: dec!(100),
                credit: dec!(50),
            }
            .error_code(),
            "UNBALANCED_RECORD"
        );
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::Unbalanced {
            debit: dec!(100.00),
            credit: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Debit and credit totals must match. Debit: 100.00, Credit: 50.00"
        );

        let err = LedgerError::NonPositiveAmount {
            line: 2,
            amount: dec!(-5),
        };
        assert_eq!(err.to_string(), "Line 2 amount must be positive, got -5");
    }

    #[test]
    fn test_app_error_mapping() {
        let app: cuadra_shared::AppError = LedgerError::EmptyRecord.into();
        assert_eq!(app.status_code(), 400);
    }
}
