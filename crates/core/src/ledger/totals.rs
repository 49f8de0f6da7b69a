//! Annual per-account-type aggregation.
//!
//! Groups a year's entry lines by account type and sums each side. The
//! result is the balance engine's input: one total per type that actually
//! moved during the year.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{EntryLine, EntrySide};
use crate::balance::AccountTypeTotal;

/// Aggregates a year's entry lines into per-type debit/credit totals.
///
/// Types without movements are absent from the result, not emitted as
/// zeros. Output is ordered by account-type name; the balance engine
/// applies its own canonical ordering afterwards.
#[must_use]
pub fn aggregate_annual_totals<'a, I>(lines: I) -> Vec<AccountTypeTotal>
where
    I: IntoIterator<Item = &'a EntryLine>,
{
    let mut by_type: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();

    for line in lines {
        let entry = by_type
            .entry(line.account_type.as_str())
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match line.side {
            EntrySide::Debit => entry.0 += line.amount,
            EntrySide::Credit => entry.1 += line.amount,
        }
    }

    by_type
        .into_iter()
        .map(|(account_type, (total_debit, total_credit))| AccountTypeTotal {
            account_type: account_type.to_string(),
            total_debit,
            total_credit,
        })
        .collect()
}
