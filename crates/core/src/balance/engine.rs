//! Annual balance engine.
//!
//! A pure function from (annual per-type totals, category assignments) to
//! the ordered eight-column balance: one row per account type followed by
//! the synthetic summary block (blank separator, SUMAS, the closing
//! profit-or-loss row, TOTALES). The engine owns no state beyond the
//! configured closing method and performs no I/O.

use rust_decimal::Decimal;

use super::types::{
    AccountTypeTotal, BalanceRow, Category, CategoryAssignment, ClosingMethod, ColumnTotals,
    RowKind, LOSS_LABEL, PROFIT_LABEL, SUMS_LABEL, TOTALS_LABEL,
};
use crate::accounts::compare_account_names;

/// Annual balance engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceEngine {
    closing_method: ClosingMethod,
}

impl BalanceEngine {
    /// Creates an engine with the given closing method.
    #[must_use]
    pub const fn new(closing_method: ClosingMethod) -> Self {
        Self { closing_method }
    }

    /// Returns the configured closing method.
    #[must_use]
    pub const fn closing_method(&self) -> ClosingMethod {
        self.closing_method
    }

    /// Builds the ordered account rows from annual totals and saved
    /// category assignments.
    ///
    /// For each total, `balance = debit − credit`: a positive balance is a
    /// debtor balance, a negative one a creditor balance (stored as its
    /// absolute value). Rows are ordered canonical-first, then custom
    /// types by name. An assignment classifies a row only when its balance
    /// magnitude is strictly positive; a zero-balance account is never
    /// classified, even when an assignment exists.
    #[must_use]
    pub fn build_rows(
        &self,
        totals: &[AccountTypeTotal],
        assignments: &[CategoryAssignment],
    ) -> Vec<BalanceRow> {
        let mut rows: Vec<BalanceRow> = totals.iter().map(Self::account_row).collect();

        rows.sort_by(|a, b| compare_account_names(&a.label, &b.label));

        for row in &mut rows {
            let Some(assignment) = assignments.iter().find(|a| a.account_type == row.label)
            else {
                continue;
            };
            let value = row.balance_magnitude();
            if value > Decimal::ZERO {
                row.set_category(assignment.category, value);
            }
        }

        tracing::debug!(rows = rows.len(), "built balance rows");
        rows
    }

    /// Appends the synthetic summary block to a set of account rows.
    ///
    /// Emits, in order: the account rows, a blank separator, the SUMAS
    /// column sums, the closing row, and the TOTALES row (SUMAS plus the
    /// closing contributions). Any summary rows already present in the
    /// input are discarded and recomputed.
    #[must_use]
    pub fn append_summary(&self, rows: Vec<BalanceRow>) -> Vec<BalanceRow> {
        let mut rows: Vec<BalanceRow> = rows.into_iter().filter(BalanceRow::is_account_row).collect();

        let mut totals = ColumnTotals::default();
        for row in &rows {
            totals.add(row);
        }

        let closing = self.closing_row(&totals);

        let mut sums = BalanceRow::empty(SUMS_LABEL, RowKind::Sums);
        sums.debit = totals.debit;
        sums.credit = totals.credit;
        sums.debtor_balance = totals.debtor;
        sums.creditor_balance = totals.creditor;
        sums.asset = totals.asset;
        sums.liability = totals.liability;
        sums.loss = totals.loss;
        sums.gain = totals.gain;

        let mut grand = sums.clone();
        grand.label = TOTALS_LABEL.to_string();
        grand.kind = RowKind::Totals;
        grand.asset += closing.asset;
        grand.liability += closing.liability;
        grand.loss += closing.loss;
        grand.gain += closing.gain;

        tracing::debug!(
            method = ?self.closing_method,
            closing_label = %closing.label,
            "appended balance summary"
        );

        rows.push(BalanceRow::empty("", RowKind::Blank));
        rows.push(sums);
        rows.push(closing);
        rows.push(grand);
        rows
    }

    /// Builds the complete balance: account rows plus the summary block.
    #[must_use]
    pub fn build(
        &self,
        totals: &[AccountTypeTotal],
        assignments: &[CategoryAssignment],
    ) -> Vec<BalanceRow> {
        self.append_summary(self.build_rows(totals, assignments))
    }

    /// Re-assigns the category of one account row and recomputes the
    /// summary block.
    ///
    /// The operation is a no-op (the input is returned unchanged) when the
    /// index is out of range, targets a summary row, or the row's balance
    /// magnitude is zero. Reassignment fully replaces any previous
    /// classification and is idempotent.
    #[must_use]
    pub fn reassign_category(
        &self,
        rows: &[BalanceRow],
        index: usize,
        category: Category,
    ) -> Vec<BalanceRow> {
        let Some(target) = rows.get(index) else {
            return rows.to_vec();
        };
        if !target.is_account_row() {
            return rows.to_vec();
        }
        let value = target.balance_magnitude();
        if value <= Decimal::ZERO {
            return rows.to_vec();
        }

        let mut updated = rows.to_vec();
        updated[index].set_category(category, value);
        self.append_summary(updated)
    }

    fn account_row(total: &AccountTypeTotal) -> BalanceRow {
        let balance = total.total_debit - total.total_credit;
        let mut row = BalanceRow::empty(total.account_type.clone(), RowKind::Account);
        row.debit = total.total_debit;
        row.credit = total.total_credit;
        row.debtor_balance = balance.max(Decimal::ZERO);
        row.creditor_balance = (-balance).max(Decimal::ZERO);
        row
    }

    /// Computes the closing (profit-or-loss) row from the column sums.
    fn closing_row(&self, totals: &ColumnTotals) -> BalanceRow {
        match self.closing_method {
            ClosingMethod::Legacy => Self::legacy_closing(totals),
            ClosingMethod::Corrected => Self::corrected_closing(totals),
        }
    }

    /// Historical rule: the whole closing entry is derived from
    /// `gain − loss`. A profit is injected into pasivo and pérdidas, a
    /// loss into activo and ganancias. Kept bit-for-bit compatible with
    /// saved balances.
    fn legacy_closing(totals: &ColumnTotals) -> BalanceRow {
        let difference = totals.gain - totals.loss;

        let label = if difference < Decimal::ZERO {
            LOSS_LABEL
        } else {
            PROFIT_LABEL
        };
        let mut row = BalanceRow::empty(label, RowKind::Closing);

        if difference < Decimal::ZERO {
            row.asset = difference.abs();
            row.gain = difference.abs();
        } else {
            row.liability = difference;
            row.loss = difference;
        }
        row
    }

    /// Corrected rule: each column pair is closed from its own residual.
    /// The inventory pair closes on `asset − liability`, the result pair
    /// on `gain − loss`, so the final TOTALES always satisfy
    /// `asset == liability` and `loss == gain` even when some accounts
    /// are still unclassified. The label follows the result side.
    fn corrected_closing(totals: &ColumnTotals) -> BalanceRow {
        let inventory = totals.asset - totals.liability;
        let result = totals.gain - totals.loss;

        let label = if result < Decimal::ZERO {
            LOSS_LABEL
        } else {
            PROFIT_LABEL
        };
        let mut row = BalanceRow::empty(label, RowKind::Closing);

        row.liability = inventory.max(Decimal::ZERO);
        row.asset = (-inventory).max(Decimal::ZERO);
        row.loss = result.max(Decimal::ZERO);
        row.gain = (-result).max(Decimal::ZERO);
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn total(account_type: &str, debit: Decimal, credit: Decimal) -> AccountTypeTotal {
        AccountTypeTotal {
            account_type: account_type.to_string(),
            total_debit: debit,
            total_credit: credit,
        }
    }

    fn assignment(account_type: &str, category: Category) -> CategoryAssignment {
        CategoryAssignment {
            account_type: account_type.to_string(),
            category,
        }
    }

    fn legacy() -> BalanceEngine {
        BalanceEngine::new(ClosingMethod::Legacy)
    }

    fn corrected() -> BalanceEngine {
        BalanceEngine::new(ClosingMethod::Corrected)
    }

    /// Fixture from the interactive flow: Caja nets to an 800 debtor
    /// balance, Ingreso to a 1000 creditor balance.
    fn caja_ingreso() -> Vec<AccountTypeTotal> {
        vec![
            total("Caja", dec!(1000), dec!(200)),
            total("Ingreso", dec!(0), dec!(1000)),
        ]
    }

    #[test]
    fn test_build_rows_splits_balance_into_sides() {
        let rows = legacy().build_rows(&caja_ingreso(), &[]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Caja");
        assert_eq!(rows[0].debtor_balance, dec!(800));
        assert_eq!(rows[0].creditor_balance, Decimal::ZERO);
        assert_eq!(rows[1].label, "Ingreso");
        assert_eq!(rows[1].debtor_balance, Decimal::ZERO);
        assert_eq!(rows[1].creditor_balance, dec!(1000));
    }

    #[test]
    fn test_build_rows_orders_canonical_then_custom() {
        let totals = vec![
            total("Proveedores", dec!(10), dec!(0)),
            total("Ingreso", dec!(0), dec!(5)),
            total("Arriendo", dec!(3), dec!(0)),
            total("Caja", dec!(7), dec!(0)),
        ];

        let rows = legacy().build_rows(&totals, &[]);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Caja", "Ingreso", "Arriendo", "Proveedores"]);
    }

    #[test]
    fn test_assignment_applies_balance_magnitude_to_one_column() {
        let assignments = vec![
            assignment("Caja", Category::Asset),
            assignment("Ingreso", Category::Gain),
        ];
        let rows = legacy().build_rows(&caja_ingreso(), &assignments);

        assert_eq!(rows[0].asset, dec!(800));
        assert_eq!(rows[0].assigned_category, Some(Category::Asset));
        assert_eq!(rows[0].liability + rows[0].loss + rows[0].gain, Decimal::ZERO);

        assert_eq!(rows[1].gain, dec!(1000));
        assert_eq!(rows[1].assigned_category, Some(Category::Gain));
    }

    #[test]
    fn test_zero_balance_row_is_never_classified() {
        let totals = vec![total("Caja", dec!(500), dec!(500))];
        let assignments = vec![assignment("Caja", Category::Asset)];

        let rows = legacy().build_rows(&totals, &assignments);
        assert_eq!(rows[0].asset, Decimal::ZERO);
        assert_eq!(rows[0].assigned_category, None);
    }

    #[test]
    fn test_assignment_for_absent_type_is_ignored() {
        let assignments = vec![assignment("Banco", Category::Asset)];
        let rows = legacy().build_rows(&caja_ingreso(), &assignments);

        assert!(rows.iter().all(|r| r.assigned_category.is_none()));
    }

    #[test]
    fn test_negative_inputs_propagate_arithmetically() {
        // No defensive rejection: a negative debit simply nets to the
        // creditor side.
        let totals = vec![total("Ajuste CF", dec!(-100), dec!(0))];
        let rows = legacy().build_rows(&totals, &[]);

        assert_eq!(rows[0].debtor_balance, Decimal::ZERO);
        assert_eq!(rows[0].creditor_balance, dec!(100));
    }

    #[test]
    fn test_summary_block_shape() {
        let rows = legacy().build(&caja_ingreso(), &[]);

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2].kind, RowKind::Blank);
        assert_eq!(rows[2].label, "");
        assert_eq!(rows[3].label, SUMS_LABEL);
        assert_eq!(rows[4].kind, RowKind::Closing);
        assert_eq!(rows[5].label, TOTALS_LABEL);
    }

    #[test]
    fn test_unassigned_balance_closes_with_zero_profit() {
        let rows = legacy().build(&caja_ingreso(), &[]);

        let sums = &rows[3];
        assert_eq!(sums.debit, dec!(1000));
        assert_eq!(sums.credit, dec!(1200));
        assert_eq!(sums.debtor_balance, dec!(800));
        assert_eq!(sums.creditor_balance, dec!(1000));

        // No categories assigned: gain == loss == 0, profit label with
        // zero injected amounts, TOTALES equals SUMAS.
        let closing = &rows[4];
        assert_eq!(closing.label, PROFIT_LABEL);
        assert_eq!(closing.asset, Decimal::ZERO);
        assert_eq!(closing.liability, Decimal::ZERO);
        assert_eq!(closing.loss, Decimal::ZERO);
        assert_eq!(closing.gain, Decimal::ZERO);

        let grand = &rows[5];
        assert_eq!(grand.debit, sums.debit);
        assert_eq!(grand.credit, sums.credit);
        assert_eq!(grand.asset, sums.asset);
        assert_eq!(grand.liability, sums.liability);
        assert_eq!(grand.loss, sums.loss);
        assert_eq!(grand.gain, sums.gain);
    }

    #[test]
    fn test_legacy_profit_closing() {
        let assignments = vec![
            assignment("Caja", Category::Asset),
            assignment("Ingreso", Category::Gain),
        ];
        let rows = legacy().build(&caja_ingreso(), &assignments);

        // difference = gain - loss = 1000; injected into pasivo/pérdidas.
        let closing = &rows[4];
        assert_eq!(closing.label, PROFIT_LABEL);
        assert_eq!(closing.liability, dec!(1000));
        assert_eq!(closing.loss, dec!(1000));
        assert_eq!(closing.asset, Decimal::ZERO);
        assert_eq!(closing.gain, Decimal::ZERO);

        let grand = &rows[5];
        assert_eq!(grand.asset, dec!(800));
        assert_eq!(grand.liability, dec!(1000));
        assert_eq!(grand.loss, dec!(1000));
        assert_eq!(grand.gain, dec!(1000));
    }

    #[test]
    fn test_legacy_loss_closing() {
        let totals = vec![total("Costo", dec!(500), dec!(0))];
        let assignments = vec![assignment("Costo", Category::Loss)];

        let rows = legacy().build(&totals, &assignments);

        // difference = 0 - 500 = -500; injected into activo/ganancias.
        let closing = &rows[4];
        assert_eq!(closing.label, LOSS_LABEL);
        assert_eq!(closing.asset, dec!(500));
        assert_eq!(closing.gain, dec!(500));
        assert_eq!(closing.liability, Decimal::ZERO);
        assert_eq!(closing.loss, Decimal::ZERO);

        let grand = &rows[5];
        assert_eq!(grand.asset, dec!(500));
        assert_eq!(grand.gain, dec!(500));
        assert_eq!(grand.loss, dec!(500));
    }

    #[test]
    fn test_corrected_closing_squares_both_pairs() {
        let assignments = vec![
            assignment("Caja", Category::Asset),
            assignment("Ingreso", Category::Gain),
        ];
        let rows = corrected().build(&caja_ingreso(), &assignments);

        let closing = &rows[4];
        assert_eq!(closing.label, PROFIT_LABEL);
        // Inventory residual: asset 800 - liability 0.
        assert_eq!(closing.liability, dec!(800));
        // Result residual: gain 1000 - loss 0.
        assert_eq!(closing.loss, dec!(1000));

        let grand = &rows[5];
        assert_eq!(grand.asset, grand.liability);
        assert_eq!(grand.loss, grand.gain);
    }

    #[test]
    fn test_corrected_loss_closing() {
        let totals = vec![
            total("Costo", dec!(700), dec!(0)),
            total("Ingreso", dec!(0), dec!(400)),
        ];
        let assignments = vec![
            assignment("Costo", Category::Loss),
            assignment("Ingreso", Category::Gain),
        ];

        let rows = corrected().build(&totals, &assignments);

        let closing = &rows[4];
        assert_eq!(closing.label, LOSS_LABEL);
        assert_eq!(closing.gain, dec!(300));
        assert_eq!(closing.loss, Decimal::ZERO);

        let grand = &rows[5];
        assert_eq!(grand.loss, grand.gain);
        assert_eq!(grand.asset, grand.liability);
    }

    #[test]
    fn test_reassign_category_overwrites_and_recomputes() {
        let rows = legacy().build(&caja_ingreso(), &[]);

        let updated = legacy().reassign_category(&rows, 0, Category::Asset);
        assert_eq!(updated[0].asset, dec!(800));
        assert_eq!(updated[0].assigned_category, Some(Category::Asset));
        assert_eq!(updated[3].asset, dec!(800));

        // Reassigning to a different category replaces, never accumulates.
        let updated = legacy().reassign_category(&updated, 0, Category::Loss);
        assert_eq!(updated[0].asset, Decimal::ZERO);
        assert_eq!(updated[0].loss, dec!(800));
        assert_eq!(updated[3].asset, Decimal::ZERO);
        assert_eq!(updated[3].loss, dec!(800));
    }

    #[test]
    fn test_reassign_category_is_idempotent() {
        let rows = legacy().build(&caja_ingreso(), &[]);

        let once = legacy().reassign_category(&rows, 1, Category::Gain);
        let twice = legacy().reassign_category(&once, 1, Category::Gain);

        assert_eq!(
            serde_json::to_value(&once).unwrap(),
            serde_json::to_value(&twice).unwrap()
        );
    }

    #[test]
    fn test_reassign_summary_row_is_a_noop() {
        let rows = legacy().build(&caja_ingreso(), &[]);

        for index in 2..rows.len() {
            let updated = legacy().reassign_category(&rows, index, Category::Asset);
            assert_eq!(
                serde_json::to_value(&updated).unwrap(),
                serde_json::to_value(&rows).unwrap()
            );
        }
    }

    #[test]
    fn test_reassign_zero_balance_row_is_a_noop() {
        let totals = vec![
            total("Caja", dec!(500), dec!(500)),
            total("Ingreso", dec!(0), dec!(100)),
        ];
        let rows = legacy().build(&totals, &[]);

        let updated = legacy().reassign_category(&rows, 0, Category::Asset);
        assert_eq!(
            serde_json::to_value(&updated).unwrap(),
            serde_json::to_value(&rows).unwrap()
        );
    }

    #[test]
    fn test_reassign_out_of_range_is_a_noop() {
        let rows = legacy().build(&caja_ingreso(), &[]);
        let updated = legacy().reassign_category(&rows, 99, Category::Asset);
        assert_eq!(updated.len(), rows.len());
    }

    #[test]
    fn test_balanced_books_close_with_zero_amounts() {
        let totals = vec![
            total("Caja", dec!(300), dec!(300)),
            total("IVA", dec!(50), dec!(50)),
        ];
        let rows = legacy().build(&totals, &[]);

        let closing = &rows[4];
        assert_eq!(closing.label, PROFIT_LABEL);
        assert_eq!(closing.asset + closing.liability + closing.loss + closing.gain, Decimal::ZERO);
    }
}
