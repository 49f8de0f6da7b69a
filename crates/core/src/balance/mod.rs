//! Eight-column annual balance.
//!
//! Turns the year's per-account-type totals into the classic Chilean
//! eight-column worksheet: debit/credit sums, debtor/creditor balances,
//! and the four classification columns (activo, pasivo, pérdidas,
//! ganancias), closed with a profit-or-loss entry.

pub mod engine;
pub mod types;


pub use engine::BalanceEngine;
pub use types::{
    AccountTypeTotal, BalanceRow, Category, CategoryAssignment, ClosingMethod, ColumnTotals,
    RowKind, LOSS_LABEL, PROFIT_LABEL, SUMS_LABEL, TOTALS_LABEL,
};
