//! Document totals derived from the line-item table.

use crate::line_items::DraftLine;
use rust_decimal::Decimal;

/// The four figures every document footer shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub grand_total: Decimal,
}

/// Recompute the footer from the current rows and charge percentages.
///
/// Tax and discount are percentages of the subtotal; the grand total is
/// `subtotal + tax - discount`. Callers that do not carry charges pass
/// zero for both and get `grand_total == subtotal`.
pub fn compute(lines: &[DraftLine], tax_percent: Decimal, discount_percent: Decimal) -> Totals {
    let subtotal: Decimal = lines.iter().map(|line| line.amount).sum();
    let tax_amount = subtotal * tax_percent / Decimal::ONE_HUNDRED;
    let discount_amount = subtotal * discount_percent / Decimal::ONE_HUNDRED;
    Totals {
        subtotal,
        tax_amount,
        discount_amount,
        grand_total: subtotal + tax_amount - discount_amount,
    }
}

/// Render a money value with exactly two decimal places for display.
pub fn display_amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
