//! Sale invoice records.

use super::{document_totals, require_lines, DocumentLine, Record};
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sale invoice, usually generated from a sale order. Invoices carry no
/// document-level charges, so the grand total always equals the subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleInvoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// The sale order this invoice was generated from, when there was one.
    pub order_id: Option<Uuid>,
    pub lines: Vec<DocumentLine>,
    pub subtotal: Decimal,
    pub grand_total: Decimal,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a sale invoice.
#[derive(Debug, Clone)]
pub struct CreateSaleInvoice {
    pub customer_id: Uuid,
    pub order_id: Option<Uuid>,
    pub lines: Vec<DocumentLine>,
}

impl Record for SaleInvoice {
    type Create = CreateSaleInvoice;

    fn collection() -> &'static str {
        "sale_invoices"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_input(input: CreateSaleInvoice) -> Result<Self, AppError> {
        require_lines(&input.lines)?;
        let totals = document_totals(&input.lines, Decimal::ZERO, Decimal::ZERO);
        Ok(Self {
            id: Uuid::new_v4(),
            customer_id: input.customer_id,
            order_id: input.order_id,
            lines: input.lines,
            subtotal: totals.subtotal,
            grand_total: totals.grand_total,
            created_utc: Utc::now(),
        })
    }
}
