//! Document forms: the modal flow from an editable draft to a saved record.

use crate::models::{
    BillOfMaterials, CreateBillOfMaterials, CreateSaleInvoice, CreateSaleOrder, CreateSaleReturn,
    DocumentLine, Record, SaleInvoice, SaleOrder, SaleReturn,
};
use crate::services::store::Collection;
use anyhow::anyhow;
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use draft_engine::{
    BindOutcome, DocumentDraft, DocumentKind, ReferenceLookup, SourceLookup,
};
use rust_decimal::Decimal;
use tracing::{info, instrument};
use uuid::Uuid;

/// Identity of the record an edit-mode form replaces on save.
#[derive(Debug, Clone, Copy)]
struct EditTarget {
    id: Uuid,
    created_utc: DateTime<Utc>,
}

/// One open document modal: a draft plus the submit flow around it.
///
/// The draft survives a failed submit untouched so the user can fix input
/// or retry. Cancelling is dropping the form. After a successful save the
/// form flips to edit mode, so a repeated submit replaces instead of
/// duplicating.
#[derive(Debug)]
pub struct DocumentForm {
    draft: DocumentDraft,
    product_id: Option<Uuid>,
    source_ref: Option<Uuid>,
    editing: Option<EditTarget>,
}

impl DocumentForm {
    /// Form for a brand-new document.
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            draft: DocumentDraft::new(kind),
            product_id: None,
            source_ref: None,
            editing: None,
        }
    }

    /// Form for a document generated from a source, binding it immediately.
    /// An unresolvable source id leaves an empty form, reported through the
    /// outcome.
    pub fn generate(
        kind: DocumentKind,
        source_id: Uuid,
        sources: &dyn SourceLookup,
        entities: &dyn ReferenceLookup,
    ) -> (Self, BindOutcome) {
        let mut form = Self::new(kind);
        let outcome = form.draft.bind_source(source_id, sources, entities);
        (form, outcome)
    }

    /// Edit an existing sale order.
    pub fn edit_order(order: &SaleOrder) -> Self {
        Self {
            draft: DocumentDraft::seeded(
                DocumentKind::SaleOrder,
                Some(order.customer_id),
                order.lines.iter().map(DocumentLine::to_draft_line).collect(),
                order.tax_percent,
                order.discount_percent,
            ),
            product_id: None,
            source_ref: None,
            editing: Some(EditTarget {
                id: order.id,
                created_utc: order.created_utc,
            }),
        }
    }

    /// Edit an existing sale invoice. The order reference is kept on the
    /// record but quantity ceilings are not re-derived while editing.
    pub fn edit_invoice(invoice: &SaleInvoice) -> Self {
        Self {
            draft: DocumentDraft::seeded(
                DocumentKind::SaleInvoice,
                Some(invoice.customer_id),
                invoice.lines.iter().map(DocumentLine::to_draft_line).collect(),
                Decimal::ZERO,
                Decimal::ZERO,
            ),
            product_id: None,
            source_ref: invoice.order_id,
            editing: Some(EditTarget {
                id: invoice.id,
                created_utc: invoice.created_utc,
            }),
        }
    }

    /// Edit an existing sale return.
    pub fn edit_return(sale_return: &SaleReturn) -> Self {
        Self {
            draft: DocumentDraft::seeded(
                DocumentKind::SaleReturn,
                Some(sale_return.customer_id),
                sale_return
                    .lines
                    .iter()
                    .map(DocumentLine::to_draft_line)
                    .collect(),
                sale_return.tax_percent,
                sale_return.discount_percent,
            ),
            product_id: None,
            source_ref: sale_return.invoice_id,
            editing: Some(EditTarget {
                id: sale_return.id,
                created_utc: sale_return.created_utc,
            }),
        }
    }

    /// Edit an existing bill of materials.
    pub fn edit_bom(bom: &BillOfMaterials) -> Self {
        Self {
            draft: DocumentDraft::seeded(
                DocumentKind::BillOfMaterials,
                None,
                bom.lines.iter().map(DocumentLine::to_draft_line).collect(),
                Decimal::ZERO,
                Decimal::ZERO,
            ),
            product_id: Some(bom.product_id),
            source_ref: None,
            editing: Some(EditTarget {
                id: bom.id,
                created_utc: bom.created_utc,
            }),
        }
    }

    pub fn draft(&self) -> &DocumentDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DocumentDraft {
        &mut self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The product a bill of materials manufactures.
    pub fn product_id(&self) -> Option<Uuid> {
        self.product_id
    }

    pub fn set_product(&mut self, product_id: Option<Uuid>) {
        self.product_id = product_id;
    }

    /// Persist the draft as a sale order.
    #[instrument(skip(self, orders))]
    pub async fn submit_order(
        &mut self,
        orders: &mut Collection<SaleOrder>,
    ) -> Result<SaleOrder, AppError> {
        self.expect_kind(DocumentKind::SaleOrder)?;
        let customer_id = self.require_customer()?;
        self.require_items()?;

        let input = CreateSaleOrder {
            customer_id,
            lines: self.document_lines(),
            tax_percent: self.draft.tax_percent(),
            discount_percent: self.draft.discount_percent(),
        };

        let saved = match self.editing {
            Some(target) => {
                let mut record = SaleOrder::from_input(input)?;
                record.id = target.id;
                record.created_utc = target.created_utc;
                orders.update(record).await?
            }
            None => orders.create(input).await?,
        };
        info!(id = %saved.id, grand_total = %saved.grand_total, "Sale order saved");
        self.mark_saved(saved.id, saved.created_utc);
        Ok(saved)
    }

    /// Persist the draft as a sale invoice.
    #[instrument(skip(self, invoices))]
    pub async fn submit_invoice(
        &mut self,
        invoices: &mut Collection<SaleInvoice>,
    ) -> Result<SaleInvoice, AppError> {
        self.expect_kind(DocumentKind::SaleInvoice)?;
        let customer_id = self.require_customer()?;
        self.require_items()?;

        let input = CreateSaleInvoice {
            customer_id,
            order_id: self.draft.source_id().or(self.source_ref),
            lines: self.document_lines(),
        };

        let saved = match self.editing {
            Some(target) => {
                let mut record = SaleInvoice::from_input(input)?;
                record.id = target.id;
                record.created_utc = target.created_utc;
                invoices.update(record).await?
            }
            None => invoices.create(input).await?,
        };
        info!(id = %saved.id, grand_total = %saved.grand_total, "Sale invoice saved");
        self.mark_saved(saved.id, saved.created_utc);
        Ok(saved)
    }

    /// Persist the draft as a sale return.
    #[instrument(skip(self, returns))]
    pub async fn submit_return(
        &mut self,
        returns: &mut Collection<SaleReturn>,
    ) -> Result<SaleReturn, AppError> {
        self.expect_kind(DocumentKind::SaleReturn)?;
        let customer_id = self.require_customer()?;
        self.require_items()?;

        let input = CreateSaleReturn {
            customer_id,
            invoice_id: self.draft.source_id().or(self.source_ref),
            lines: self.document_lines(),
            tax_percent: self.draft.tax_percent(),
            discount_percent: self.draft.discount_percent(),
        };

        let saved = match self.editing {
            Some(target) => {
                let mut record = SaleReturn::from_input(input)?;
                record.id = target.id;
                record.created_utc = target.created_utc;
                returns.update(record).await?
            }
            None => returns.create(input).await?,
        };
        info!(id = %saved.id, grand_total = %saved.grand_total, "Sale return saved");
        self.mark_saved(saved.id, saved.created_utc);
        Ok(saved)
    }

    /// Persist the draft as a bill of materials.
    #[instrument(skip(self, boms))]
    pub async fn submit_bom(
        &mut self,
        boms: &mut Collection<BillOfMaterials>,
    ) -> Result<BillOfMaterials, AppError> {
        self.expect_kind(DocumentKind::BillOfMaterials)?;
        let product_id = self
            .product_id
            .ok_or_else(|| AppError::BadRequest(anyhow!("Select a product before saving")))?;
        self.require_items()?;

        let input = CreateBillOfMaterials {
            product_id,
            lines: self.document_lines(),
        };

        let saved = match self.editing {
            Some(target) => {
                let mut record = BillOfMaterials::from_input(input)?;
                record.id = target.id;
                record.created_utc = target.created_utc;
                boms.update(record).await?
            }
            None => boms.create(input).await?,
        };
        info!(id = %saved.id, grand_total = %saved.grand_total, "Bill of materials saved");
        self.mark_saved(saved.id, saved.created_utc);
        Ok(saved)
    }

    fn expect_kind(&self, kind: DocumentKind) -> Result<(), AppError> {
        if self.draft.kind() != kind {
            return Err(AppError::BadRequest(anyhow!(
                "This form holds a {} draft",
                self.draft.kind().as_str()
            )));
        }
        Ok(())
    }

    fn require_customer(&self) -> Result<Uuid, AppError> {
        self.draft
            .customer_id()
            .ok_or_else(|| AppError::BadRequest(anyhow!("Select a customer before saving")))
    }

    fn require_items(&self) -> Result<(), AppError> {
        if self.draft.items().is_empty() {
            return Err(AppError::BadRequest(anyhow!("Add at least one item")));
        }
        Ok(())
    }

    fn document_lines(&self) -> Vec<DocumentLine> {
        self.draft.items().iter().map(DocumentLine::from).collect()
    }

    fn mark_saved(&mut self, id: Uuid, created_utc: DateTime<Utc>) {
        self.editing = Some(EditTarget { id, created_utc });
    }
}
