//! Canonical base-account ordering.

use std::cmp::Ordering;

/// Base account types in their fixed balance-sheet order.
///
/// Rows for these types always appear first and in this order; any other
/// (custom) type follows, sorted by name.
pub const BASE_ACCOUNT_ORDER: [&str; 9] = [
    "Caja",
    "Ingreso",
    "Costo",
    "IVA",
    "PPM",
    "Ajuste CF",
    "Retencion SC",
    "Honorarios",
    "Gastos Generales",
];

/// Returns the position of `name` in the canonical base-account order,
/// or `None` for custom types.
#[must_use]
pub fn canonical_position(name: &str) -> Option<usize> {
    BASE_ACCOUNT_ORDER.iter().position(|base| *base == name)
}

/// Compares two account-type names for balance-row ordering.
///
/// Canonical types come first, in canonical order; custom types follow,
/// ordered lexicographically by name.
#[must_use]
pub fn compare_account_names(a: &str, b: &str) -> Ordering {
    match (canonical_position(a), canonical_position(b)) {
        (Some(pos_a), Some(pos_b)) => pos_a.cmp(&pos_b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
