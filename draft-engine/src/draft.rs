//! The draft: one document being created or edited, with its rows, charges,
//! source binding, and eagerly recomputed totals in a single place.

use crate::error::DraftError;
use crate::line_items::{AddOutcome, DraftLine, LineItemRows};
use crate::lookup::{ReferenceLookup, SourceLookup};
use crate::profile::{DocumentKind, DocumentProfile};
use crate::totals::{self, Totals};
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

/// What happened on a source bind. An unresolvable id leaves the draft
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    Bound { lines: usize },
    UnknownSource,
}

/// An in-memory document that has not been persisted yet.
///
/// Every successful mutation recomputes [`Totals`], so `totals()` is always
/// current and screens can render the footer straight from it.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    kind: DocumentKind,
    customer_id: Option<Uuid>,
    source_id: Option<Uuid>,
    items: LineItemRows,
    tax_percent: Decimal,
    discount_percent: Decimal,
    totals: Totals,
}

impl DocumentDraft {
    /// Empty draft for a brand-new document.
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            customer_id: None,
            source_id: None,
            items: LineItemRows::new(),
            tax_percent: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            totals: Totals::default(),
        }
    }

    /// Draft seeded from a persisted document, for edit mode.
    ///
    /// Amounts are re-derived from quantity and rate rather than trusted
    /// from storage. Quantity ceilings are not restored; they come back
    /// only when a source document is re-bound.
    pub fn seeded(
        kind: DocumentKind,
        customer_id: Option<Uuid>,
        lines: Vec<DraftLine>,
        tax_percent: Decimal,
        discount_percent: Decimal,
    ) -> Self {
        let mut draft = Self::new(kind);
        draft.customer_id = customer_id;
        draft.tax_percent = tax_percent;
        draft.discount_percent = discount_percent;
        let normalized = lines
            .into_iter()
            .map(|line| DraftLine::new(line.reference_id, line.name, line.quantity, line.rate))
            .collect();
        draft.items.replace(normalized);
        draft.recompute();
        draft
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn profile(&self) -> DocumentProfile {
        self.kind.profile()
    }

    pub fn customer_id(&self) -> Option<Uuid> {
        self.customer_id
    }

    pub fn source_id(&self) -> Option<Uuid> {
        self.source_id
    }

    /// Whether the customer field is fixed by a bound source document.
    pub fn customer_locked(&self) -> bool {
        self.source_id.is_some()
    }

    pub fn items(&self) -> &[DraftLine] {
        self.items.lines()
    }

    pub fn tax_percent(&self) -> Decimal {
        self.tax_percent
    }

    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Pick or clear the customer. Refused while a source document is
    /// bound, because the source already determines the customer.
    pub fn set_customer(&mut self, customer_id: Option<Uuid>) -> Result<(), DraftError> {
        if self.customer_locked() {
            return Err(DraftError::CustomerLocked);
        }
        self.customer_id = customer_id;
        Ok(())
    }

    pub fn add_item(&mut self, reference_id: Uuid, entities: &dyn ReferenceLookup) -> AddOutcome {
        let outcome = self.items.add_item(reference_id, entities);
        if outcome == AddOutcome::Added {
            self.recompute();
        }
        outcome
    }

    pub fn set_quantity(&mut self, index: usize, value: Decimal) -> Result<(), DraftError> {
        self.items.set_quantity(index, value)?;
        self.recompute();
        Ok(())
    }

    pub fn set_rate(&mut self, index: usize, value: Decimal) -> Result<(), DraftError> {
        self.items.set_rate(index, value)?;
        self.recompute();
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> bool {
        let removed = self.items.remove_item(index);
        if removed {
            self.recompute();
        }
        removed
    }

    pub fn set_tax_percent(&mut self, value: Decimal) -> Result<(), DraftError> {
        if value < Decimal::ZERO {
            return Err(DraftError::NegativePercent);
        }
        self.tax_percent = value;
        self.recompute();
        Ok(())
    }

    pub fn set_discount_percent(&mut self, value: Decimal) -> Result<(), DraftError> {
        if value < Decimal::ZERO {
            return Err(DraftError::NegativePercent);
        }
        self.discount_percent = value;
        self.recompute();
        Ok(())
    }

    /// Bind the draft to a source document: its lines displace the current
    /// table wholesale, each capped at the quantity the source recorded,
    /// and the customer follows the source and locks.
    ///
    /// Lines whose rate the source did not record fall back to the entity's
    /// default rate, or to zero when the entity is no longer resolvable.
    pub fn bind_source(
        &mut self,
        source_id: Uuid,
        sources: &dyn SourceLookup,
        entities: &dyn ReferenceLookup,
    ) -> BindOutcome {
        let Some(source) = sources.resolve(source_id) else {
            debug!(%source_id, "Ignoring bind to unresolvable source document");
            return BindOutcome::UnknownSource;
        };

        let lines: Vec<DraftLine> = source
            .lines
            .iter()
            .map(|source_line| {
                let rate = source_line
                    .rate
                    .or_else(|| {
                        entities
                            .resolve(source_line.reference_id)
                            .map(|entity| entity.default_rate)
                    })
                    .unwrap_or(Decimal::ZERO);
                let mut line = DraftLine::new(
                    source_line.reference_id,
                    source_line.name.clone(),
                    source_line.quantity,
                    rate,
                );
                line.max_quantity = Some(source_line.quantity);
                line
            })
            .collect();

        self.items.replace(lines);
        self.customer_id = Some(source.customer_id);
        self.source_id = Some(source_id);
        self.recompute();
        info!(%source_id, lines = self.items.len(), "Draft bound to source document");
        BindOutcome::Bound {
            lines: self.items.len(),
        }
    }

    /// Drop the source binding: the table empties and the customer unlocks.
    /// Does nothing when no source is bound.
    pub fn clear_source(&mut self) {
        if self.source_id.take().is_some() {
            self.items.clear();
            self.recompute();
            debug!("Source selection cleared; draft table emptied");
        }
    }

    fn recompute(&mut self) {
        let profile = self.kind.profile();
        let (tax, discount) = if profile.charges_apply {
            (self.tax_percent, self.discount_percent)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };
        self.totals = totals::compute(self.items.lines(), tax, discount);
    }
}
