//! Monthly record validation and annual aggregation.
//!
//! This module implements the bookkeeping entry rules:
//! - Entry lines (debit and credit sides)
//! - Monthly record validation with the manual debit/credit equality check
//! - Control and total figures
//! - Annual per-account-type aggregation feeding the balance engine

pub mod error;
pub mod service;
pub mod totals;
pub mod types;

pub use error::LedgerError;
pub use service::RecordService;
pub use totals::aggregate_annual_totals;
pub use types::{EntryLine, EntrySide, Month, MonthlyRecord, MonthlyRecordInput, RecordTotals};
