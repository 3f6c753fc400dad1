//! Domain models for the ERP client.

mod bom;
mod customer;
mod document_line;
mod operation;
mod payroll;
mod product;
mod sale_invoice;
mod sale_order;
mod sale_return;
mod workstation;

pub use bom::{BillOfMaterials, CreateBillOfMaterials};
pub use customer::{CreateCustomer, Customer};
pub use document_line::DocumentLine;
pub use operation::{CreateOperation, Operation};
pub use payroll::{CreatePayrollRecord, PayrollRecord};
pub use product::{CreateProduct, Product};
pub use sale_invoice::{CreateSaleInvoice, SaleInvoice};
pub use sale_order::{CreateSaleOrder, SaleOrder};
pub use sale_return::{CreateSaleReturn, SaleReturn};
pub use workstation::{CreateWorkstation, Workstation};

use anyhow::anyhow;
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A persistable entity: names its collection, knows its id, and builds
/// itself from a validated create input.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Create: Send;

    fn collection() -> &'static str;

    fn id(&self) -> Uuid;

    /// Validate the input and build a fresh record (new id, current
    /// timestamp). All record construction funnels through here.
    fn from_input(input: Self::Create) -> Result<Self, AppError>;
}

/// Reject negative money and percentage inputs with a field-named message.
pub(crate) fn require_non_negative(field: &str, value: Decimal) -> Result<(), AppError> {
    if value < Decimal::ZERO {
        return Err(AppError::BadRequest(anyhow!(
            "{} must not be negative",
            field
        )));
    }
    Ok(())
}

/// Document create inputs must carry at least one line.
pub(crate) fn require_lines(lines: &[DocumentLine]) -> Result<(), AppError> {
    if lines.is_empty() {
        return Err(AppError::BadRequest(anyhow!("Add at least one item")));
    }
    Ok(())
}

/// Totals for a persisted document, derived from its lines with the same
/// arithmetic the draft footer uses.
pub(crate) fn document_totals(
    lines: &[DocumentLine],
    tax_percent: Decimal,
    discount_percent: Decimal,
) -> draft_engine::Totals {
    let draft_lines: Vec<draft_engine::DraftLine> =
        lines.iter().map(DocumentLine::to_draft_line).collect();
    draft_engine::totals::compute(&draft_lines, tax_percent, discount_percent)
}
