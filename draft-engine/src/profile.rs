//! Document kinds and the per-kind editing profile.

use serde::{Deserialize, Serialize};

/// The document types that carry an editable line-item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    SaleOrder,
    SaleInvoice,
    SaleReturn,
    BillOfMaterials,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::SaleOrder => "sale_order",
            DocumentKind::SaleInvoice => "sale_invoice",
            DocumentKind::SaleReturn => "sale_return",
            DocumentKind::BillOfMaterials => "bill_of_materials",
        }
    }

    pub fn from_string(kind: &str) -> Self {
        match kind.to_lowercase().as_str() {
            "sale_invoice" => DocumentKind::SaleInvoice,
            "sale_return" => DocumentKind::SaleReturn,
            "bill_of_materials" => DocumentKind::BillOfMaterials,
            _ => DocumentKind::SaleOrder,
        }
    }

    /// How the shared editor behaves for this kind.
    pub fn profile(&self) -> DocumentProfile {
        match self {
            DocumentKind::SaleOrder => DocumentProfile {
                charges_apply: true,
                source_kind: None,
            },
            DocumentKind::SaleInvoice => DocumentProfile {
                charges_apply: false,
                source_kind: Some(DocumentKind::SaleOrder),
            },
            DocumentKind::SaleReturn => DocumentProfile {
                charges_apply: true,
                source_kind: Some(DocumentKind::SaleInvoice),
            },
            DocumentKind::BillOfMaterials => DocumentProfile {
                charges_apply: false,
                source_kind: None,
            },
        }
    }
}

/// Static configuration the [`DocumentKind`] hands to the draft editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentProfile {
    /// Whether tax and discount percentages participate in the totals.
    /// Kinds without charges keep the grand total equal to the subtotal.
    pub charges_apply: bool,
    /// The kind this document is generated from, when it supports a source
    /// selector at all.
    pub source_kind: Option<DocumentKind>,
}
