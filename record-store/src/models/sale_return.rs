//! Sale return records.

use super::{document_totals, require_lines, require_non_negative, DocumentLine, Record};
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Goods coming back against a sale invoice. Returns carry their own tax
/// and discount, mirroring the order side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleReturn {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// The invoice this return was generated from, when there was one.
    pub invoice_id: Option<Uuid>,
    pub lines: Vec<DocumentLine>,
    pub tax_percent: Decimal,
    pub discount_percent: Decimal,
    pub subtotal: Decimal,
    pub grand_total: Decimal,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a sale return.
#[derive(Debug, Clone)]
pub struct CreateSaleReturn {
    pub customer_id: Uuid,
    pub invoice_id: Option<Uuid>,
    pub lines: Vec<DocumentLine>,
    pub tax_percent: Decimal,
    pub discount_percent: Decimal,
}

impl Record for SaleReturn {
    type Create = CreateSaleReturn;

    fn collection() -> &'static str {
        "sale_returns"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_input(input: CreateSaleReturn) -> Result<Self, AppError> {
        require_lines(&input.lines)?;
        require_non_negative("Tax percent", input.tax_percent)?;
        require_non_negative("Discount percent", input.discount_percent)?;
        let totals = document_totals(&input.lines, input.tax_percent, input.discount_percent);
        Ok(Self {
            id: Uuid::new_v4(),
            customer_id: input.customer_id,
            invoice_id: input.invoice_id,
            lines: input.lines,
            tax_percent: input.tax_percent,
            discount_percent: input.discount_percent,
            subtotal: totals.subtotal,
            grand_total: totals.grand_total,
            created_utc: Utc::now(),
        })
    }
}
