//! Persisted line items shared by every document model.

use draft_engine::{DraftLine, SourceLine};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored row of a line-item document. Quantity ceilings are a drafting
/// concern and are not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLine {
    pub reference_id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

impl From<&DraftLine> for DocumentLine {
    fn from(line: &DraftLine) -> Self {
        Self {
            reference_id: line.reference_id,
            name: line.name.clone(),
            quantity: line.quantity,
            rate: line.rate,
            amount: line.amount,
        }
    }
}

impl DocumentLine {
    /// View of this line as binder input, e.g. when an invoice line seeds a
    /// return draft. Persisted lines always carry their rate.
    pub fn to_source_line(&self) -> SourceLine {
        SourceLine {
            reference_id: self.reference_id,
            name: self.name.clone(),
            quantity: self.quantity,
            rate: Some(self.rate),
        }
    }

    /// View of this line as an editable draft row, for edit mode. No
    /// ceiling comes back; re-binding the source document re-applies it.
    pub fn to_draft_line(&self) -> DraftLine {
        DraftLine::new(
            self.reference_id,
            self.name.clone(),
            self.quantity,
            self.rate,
        )
    }
}
