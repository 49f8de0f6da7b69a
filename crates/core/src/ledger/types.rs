//! Ledger domain types for monthly records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use cuadra_shared::types::{CompanyId, RecordId};

/// Side of a ledger entry: debit ("debe") or credit ("haber").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntrySide {
    /// Debit entry.
    #[serde(rename = "debe")]
    Debit,
    /// Credit entry.
    #[serde(rename = "haber")]
    Credit,
}

/// Calendar month of a record, displayed in Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    /// January.
    Enero,
    /// February.
    Febrero,
    /// March.
    Marzo,
    /// April.
    Abril,
    /// May.
    Mayo,
    /// June.
    Junio,
    /// July.
    Julio,
    /// August.
    Agosto,
    /// September.
    Septiembre,
    /// October.
    Octubre,
    /// November.
    Noviembre,
    /// December.
    Diciembre,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Enero,
        Self::Febrero,
        Self::Marzo,
        Self::Abril,
        Self::Mayo,
        Self::Junio,
        Self::Julio,
        Self::Agosto,
        Self::Septiembre,
        Self::Octubre,
        Self::Noviembre,
        Self::Diciembre,
    ];

    /// Returns the month for a 1-based number, or `None` out of range.
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Returns the 1-based month number.
    #[must_use]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the Spanish display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Enero => "Enero",
            Self::Febrero => "Febrero",
            Self::Marzo => "Marzo",
            Self::Abril => "Abril",
            Self::Mayo => "Mayo",
            Self::Junio => "Junio",
            Self::Julio => "Julio",
            Self::Agosto => "Agosto",
            Self::Septiembre => "Septiembre",
            Self::Octubre => "Octubre",
            Self::Noviembre => "Noviembre",
            Self::Diciembre => "Diciembre",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single line of a monthly record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryLine {
    /// Free-text detail shared by the lines of one movement.
    pub description: String,
    /// Account-type name the amount is posted to.
    pub account_type: String,
    /// Debit or credit side.
    pub side: EntrySide,
    /// Amount (must be positive).
    pub amount: Decimal,
}

/// Input for a monthly record before persistence.
#[derive(Debug, Clone)]
pub struct MonthlyRecordInput {
    /// The company this record belongs to.
    pub company_id: CompanyId,
    /// Month of the record.
    pub month: Month,
    /// Year of the record.
    pub year: i32,
    /// The entry lines (at least one).
    pub lines: Vec<EntryLine>,
}

/// A validated monthly record ready to persist.
///
/// Record history lists these newest-first by `recorded_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Unique identifier.
    pub id: RecordId,
    /// The company this record belongs to.
    pub company_id: CompanyId,
    /// Month of the record.
    pub month: Month,
    /// Year of the record.
    pub year: i32,
    /// The validated entry lines.
    pub lines: Vec<EntryLine>,
    /// Derived control and total figures.
    pub totals: RecordTotals,
    /// When the record was entered.
    pub recorded_at: DateTime<Utc>,
}

/// Derived figures for a validated monthly record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTotals {
    /// Sum of all debit-side amounts.
    pub total_debit: Decimal,
    /// Sum of all credit-side amounts.
    pub total_credit: Decimal,
    /// Control figure: the debit total when any debit exists, otherwise
    /// the credit total.
    pub control: Decimal,
    /// Sum of every line amount regardless of side.
    pub total: Decimal,
}
