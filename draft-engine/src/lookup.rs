//! Collaborator traits the draft engine uses to resolve record references.
//!
//! The engine never holds a catalog of its own. Screens that own a draft
//! pass these lookups in at the call sites that need them, so the same
//! editing logic runs against live API data, a local snapshot, or the
//! in-memory stubs the tests use.

use rust_decimal::Decimal;
use uuid::Uuid;

/// A product or operation, reduced to what the editor needs to start a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntity {
    pub id: Uuid,
    pub name: String,
    pub default_rate: Decimal,
}

/// Resolves product/operation ids against the loaded records.
pub trait ReferenceLookup {
    fn resolve(&self, id: Uuid) -> Option<ReferenceEntity>;
}

/// One line of a persisted document, as needed to seed a dependent draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub reference_id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    /// Rate recorded on the source line. Absent on older documents that
    /// predate per-line rates; the binder falls back to the entity default.
    pub rate: Option<Decimal>,
}

/// A persisted document another draft can be generated from, e.g. the sale
/// order behind an invoice or the invoice behind a return.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub customer_id: Uuid,
    pub lines: Vec<SourceLine>,
}

/// Resolves source-document ids against the loaded records.
pub trait SourceLookup {
    fn resolve(&self, id: Uuid) -> Option<SourceDocument>;
}
