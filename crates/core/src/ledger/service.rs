//! Monthly record validation.
//!
//! Pure business logic run before a record is persisted. The only
//! double-entry enforcement is the manual debit/credit equality check:
//! when a record carries both sides, their totals must match within a
//! small tolerance.

use rust_decimal::Decimal;

use cuadra_shared::types::RecordId;

use super::error::LedgerError;
use super::types::{EntrySide, MonthlyRecord, MonthlyRecordInput, RecordTotals};

/// Record service for monthly entry validation.
pub struct RecordService;

impl RecordService {
    /// Validates a monthly record and computes its derived figures.
    ///
    /// Checks, in order:
    /// 1. At least one entry line
    /// 2. Every line has a description, an account type, and a positive amount
    /// 3. When both sides are present, debit and credit totals match
    ///    within the tolerance
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if any check fails.
    pub fn validate(input: &MonthlyRecordInput) -> Result<RecordTotals, LedgerError> {
        if input.lines.is_empty() {
            return Err(LedgerError::EmptyRecord);
        }

        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;
        let mut total = Decimal::ZERO;

        for (index, line) in input.lines.iter().enumerate() {
            if line.description.trim().is_empty() {
                return Err(LedgerError::MissingDescription(index));
            }
            if line.account_type.trim().is_empty() {
                return Err(LedgerError::MissingAccountType(index));
            }
            if line.amount <= Decimal::ZERO {
                return Err(LedgerError::NonPositiveAmount {
                    line: index,
                    amount: line.amount,
                });
            }

            match line.side {
                EntrySide::Debit => total_debit += line.amount,
                EntrySide::Credit => total_credit += line.amount,
            }
            total += line.amount;
        }

        // The equality check only applies when the record carries both sides.
        // Tolerance of 0.01 absorbs rounding in hand-entered amounts.
        let tolerance = Decimal::new(1, 2);
        if total_debit > Decimal::ZERO
            && total_credit > Decimal::ZERO
            && (total_debit - total_credit).abs() > tolerance
        {
            return Err(LedgerError::Unbalanced {
                debit: total_debit,
                credit: total_credit,
            });
        }

        let control = Self::control_figure(total_debit, total_credit);

        tracing::debug!(
            month = %input.month,
            year = input.year,
            lines = input.lines.len(),
            "validated monthly record"
        );

        Ok(RecordTotals {
            total_debit,
            total_credit,
            control,
            total,
        })
    }

    /// Validates a record and builds the entity to persist, stamped with
    /// a fresh id and the current time.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if validation fails.
    pub fn build(input: MonthlyRecordInput) -> Result<MonthlyRecord, LedgerError> {
        let totals = Self::validate(&input)?;
        Ok(MonthlyRecord {
            id: RecordId::new(),
            company_id: input.company_id,
            month: input.month,
            year: input.year,
            lines: input.lines,
            totals,
            recorded_at: chrono::Utc::now(),
        })
    }

    /// Control figure: the debit total when any debit exists, otherwise
    /// the credit total.
    #[must_use]
    fn control_figure(total_debit: Decimal, total_credit: Decimal) -> Decimal {
        if total_debit > Decimal::ZERO {
            total_debit
        } else {
            total_credit
        }
    }
}
