//! Bill of materials records.

use super::{document_totals, require_lines, DocumentLine, Record};
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The operations needed to manufacture one product, each line referencing
/// an operation at an hourly cost. Chargeless: the grand total is the plain
/// sum of line amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub id: Uuid,
    pub product_id: Uuid,
    pub lines: Vec<DocumentLine>,
    pub subtotal: Decimal,
    pub grand_total: Decimal,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a bill of materials.
#[derive(Debug, Clone)]
pub struct CreateBillOfMaterials {
    pub product_id: Uuid,
    pub lines: Vec<DocumentLine>,
}

impl Record for BillOfMaterials {
    type Create = CreateBillOfMaterials;

    fn collection() -> &'static str {
        "bills_of_materials"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_input(input: CreateBillOfMaterials) -> Result<Self, AppError> {
        require_lines(&input.lines)?;
        let totals = document_totals(&input.lines, Decimal::ZERO, Decimal::ZERO);
        Ok(Self {
            id: Uuid::new_v4(),
            product_id: input.product_id,
            lines: input.lines,
            subtotal: totals.subtotal,
            grand_total: totals.grand_total,
            created_utc: Utc::now(),
        })
    }
}
