//! Balance sheet domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use cuadra_shared::config::ClosingMethod;

/// Label of the column-sums row.
pub const SUMS_LABEL: &str = "SUMAS";
/// Label of the grand-totals row.
pub const TOTALS_LABEL: &str = "TOTALES";
/// Closing-row label when the period closes with a profit.
pub const PROFIT_LABEL: &str = "UTILIDAD DEL EJERCICIO";
/// Closing-row label when the period closes with a loss.
pub const LOSS_LABEL: &str = "PÉRDIDA DEL EJERCICIO";

/// Annual debit/credit totals for one account type.
///
/// Externally aggregated from the year's ledger movements; immutable input
/// to the balance engine. Types without movements are simply absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountTypeTotal {
    /// Account-type name.
    pub account_type: String,
    /// Sum of the year's debit movements.
    pub total_debit: Decimal,
    /// Sum of the year's credit movements.
    pub total_credit: Decimal,
}

/// The four balance-sheet categories an account balance can be classified
/// into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Activo.
    #[serde(rename = "activo")]
    Asset,
    /// Pasivo.
    #[serde(rename = "pasivo")]
    Liability,
    /// Pérdidas.
    #[serde(rename = "perdidas")]
    Loss,
    /// Ganancias.
    #[serde(rename = "ganancias")]
    Gain,
}

impl Category {
    /// All categories in column order.
    pub const ALL: [Self; 4] = [Self::Asset, Self::Liability, Self::Loss, Self::Gain];

    /// Returns the persisted spelling of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "activo",
            Self::Liability => "pasivo",
            Self::Loss => "perdidas",
            Self::Gain => "ganancias",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activo" => Ok(Self::Asset),
            "pasivo" => Ok(Self::Liability),
            "perdidas" => Ok(Self::Loss),
            "ganancias" => Ok(Self::Gain),
            _ => Err(format!("Unknown balance category: {s}")),
        }
    }
}

/// A saved category assignment for one account type.
///
/// Persisted per (company, year) as a full replacement set; the engine
/// only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAssignment {
    /// Account-type name.
    pub account_type: String,
    /// Assigned category.
    pub category: Category,
}

/// Kind of a balance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// A per-account-type data row.
    Account,
    /// The blank separator before the summary block.
    Blank,
    /// The SUMAS column-sums row.
    Sums,
    /// The closing (profit-or-loss) row.
    Closing,
    /// The TOTALES grand-totals row.
    Totals,
}

/// One row of the eight-column annual balance.
///
/// Account rows carry at most one nonzero side balance and at most one
/// nonzero category column; summary rows are derived on every engine
/// invocation and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRow {
    /// Account-type name, or the summary-row label.
    pub label: String,
    /// Kind of row.
    pub kind: RowKind,
    /// Annual debit total.
    pub debit: Decimal,
    /// Annual credit total.
    pub credit: Decimal,
    /// Debtor-side balance (debit − credit when positive).
    pub debtor_balance: Decimal,
    /// Creditor-side balance (credit − debit when positive).
    pub creditor_balance: Decimal,
    /// Activo column.
    pub asset: Decimal,
    /// Pasivo column.
    pub liability: Decimal,
    /// Pérdidas column.
    pub loss: Decimal,
    /// Ganancias column.
    pub gain: Decimal,
    /// The category this row is classified into, when any.
    pub assigned_category: Option<Category>,
}

impl BalanceRow {
    /// Creates an empty row of the given kind.
    #[must_use]
    pub fn empty(label: impl Into<String>, kind: RowKind) -> Self {
        Self {
            label: label.into(),
            kind,
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
            debtor_balance: Decimal::ZERO,
            creditor_balance: Decimal::ZERO,
            asset: Decimal::ZERO,
            liability: Decimal::ZERO,
            loss: Decimal::ZERO,
            gain: Decimal::ZERO,
            assigned_category: None,
        }
    }

    /// Returns true for per-account-type data rows.
    #[must_use]
    pub fn is_account_row(&self) -> bool {
        self.kind == RowKind::Account
    }

    /// The row's effective balance: the debtor balance when positive,
    /// otherwise the creditor balance.
    #[must_use]
    pub fn balance_magnitude(&self) -> Decimal {
        if self.debtor_balance > Decimal::ZERO {
            self.debtor_balance
        } else {
            self.creditor_balance
        }
    }

    /// Returns the value of one category column.
    #[must_use]
    pub fn category_amount(&self, category: Category) -> Decimal {
        match category {
            Category::Asset => self.asset,
            Category::Liability => self.liability,
            Category::Loss => self.loss,
            Category::Gain => self.gain,
        }
    }

    /// Classifies the row: sets the chosen category column to `value` and
    /// clears the other three. Replaces any previous classification.
    pub fn set_category(&mut self, category: Category, value: Decimal) {
        self.asset = Decimal::ZERO;
        self.liability = Decimal::ZERO;
        self.loss = Decimal::ZERO;
        self.gain = Decimal::ZERO;
        match category {
            Category::Asset => self.asset = value,
            Category::Liability => self.liability = value,
            Category::Loss => self.loss = value,
            Category::Gain => self.gain = value,
        }
        self.assigned_category = Some(category);
    }
}

/// Column-wise sums over a set of balance rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnTotals {
    /// Sum of the debit column.
    pub debit: Decimal,
    /// Sum of the credit column.
    pub credit: Decimal,
    /// Sum of the debtor-balance column.
    pub debtor: Decimal,
    /// Sum of the creditor-balance column.
    pub creditor: Decimal,
    /// Sum of the activo column.
    pub asset: Decimal,
    /// Sum of the pasivo column.
    pub liability: Decimal,
    /// Sum of the pérdidas column.
    pub loss: Decimal,
    /// Sum of the ganancias column.
    pub gain: Decimal,
}

impl ColumnTotals {
    /// Accumulates one row into the totals.
    pub fn add(&mut self, row: &BalanceRow) {
        self.debit += row.debit;
        self.credit += row.credit;
        self.debtor += row.debtor_balance;
        self.creditor += row.creditor_balance;
        self.asset += row.asset;
        self.liability += row.liability;
        self.loss += row.loss;
        self.gain += row.gain;
    }
}
