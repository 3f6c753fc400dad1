//! Rejection reasons surfaced by draft mutations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a draft mutation was refused. The draft is left untouched whenever
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Quantity must be at least 1")]
    QuantityBelowMinimum,

    #[error("Quantity exceeds source document quantity (at most {max})")]
    QuantityExceedsSource { max: Decimal },

    #[error("Rate must not be negative")]
    NegativeRate,

    #[error("Percentage must not be negative")]
    NegativePercent,

    #[error("No line item at row {index}")]
    UnknownLine { index: usize },

    #[error("Customer is fixed by the selected source document")]
    CustomerLocked,
}
