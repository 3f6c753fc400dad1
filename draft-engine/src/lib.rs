//! draft-engine: The synchronous editing core behind every document screen.
//!
//! A [`DocumentDraft`] holds the not-yet-saved state of a sale order,
//! invoice, return, or bill of materials while the user edits it. The crate
//! knows nothing about persistence or record catalogs; callers hand it
//! lookups through the [`ReferenceLookup`] and [`SourceLookup`] traits.

pub mod draft;
pub mod error;
pub mod line_items;
pub mod lookup;
pub mod profile;
pub mod totals;

pub use draft::{BindOutcome, DocumentDraft};
pub use error::DraftError;
pub use line_items::{AddOutcome, DraftLine, LineItemRows};
pub use lookup::{ReferenceEntity, ReferenceLookup, SourceDocument, SourceLine, SourceLookup};
pub use profile::{DocumentKind, DocumentProfile};
pub use totals::{display_amount, Totals};
