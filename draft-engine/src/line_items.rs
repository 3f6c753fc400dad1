//! The editable line-item table shared by every document draft.

use crate::error::DraftError;
use crate::lookup::ReferenceLookup;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

/// One row of a document draft.
///
/// `amount` is derived and holds `quantity * rate` after every mutation.
/// `max_quantity` is only present on rows that came from a source document
/// and caps how far the quantity may be raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLine {
    pub reference_id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
    pub max_quantity: Option<Decimal>,
}

impl DraftLine {
    /// Build an uncapped row with the amount derived from quantity and rate.
    pub fn new(reference_id: Uuid, name: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            reference_id,
            name: name.into(),
            quantity,
            rate,
            amount: quantity * rate,
            max_quantity: None,
        }
    }
}

/// What happened on an add. The no-op cases are deliberate, not failures:
/// the screen simply leaves the table as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    UnknownReference,
}

/// The ordered rows of one draft.
#[derive(Debug, Clone, Default)]
pub struct LineItemRows {
    lines: Vec<DraftLine>,
}

impl LineItemRows {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a row for `reference_id` with quantity 1 at the entity's
    /// default rate. Adding an id that is already in the table, or one the
    /// lookup cannot resolve, leaves the table unchanged.
    pub fn add_item(&mut self, reference_id: Uuid, entities: &dyn ReferenceLookup) -> AddOutcome {
        if self.lines.iter().any(|line| line.reference_id == reference_id) {
            debug!(%reference_id, "Ignoring duplicate add");
            return AddOutcome::AlreadyPresent;
        }
        let Some(entity) = entities.resolve(reference_id) else {
            debug!(%reference_id, "Ignoring add for unresolvable reference");
            return AddOutcome::UnknownReference;
        };
        self.lines
            .push(DraftLine::new(reference_id, entity.name, Decimal::ONE, entity.default_rate));
        AddOutcome::Added
    }

    /// Set the quantity of the row at `index`, enforcing the floor of 1 and
    /// the source-document ceiling when the row carries one.
    pub fn set_quantity(&mut self, index: usize, value: Decimal) -> Result<(), DraftError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or(DraftError::UnknownLine { index })?;
        if value < Decimal::ONE {
            return Err(DraftError::QuantityBelowMinimum);
        }
        if let Some(max) = line.max_quantity {
            if value > max {
                return Err(DraftError::QuantityExceedsSource { max });
            }
        }
        line.quantity = value;
        line.amount = line.quantity * line.rate;
        Ok(())
    }

    /// Set the rate of the row at `index`. Negative rates are refused.
    pub fn set_rate(&mut self, index: usize, value: Decimal) -> Result<(), DraftError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or(DraftError::UnknownLine { index })?;
        if value < Decimal::ZERO {
            return Err(DraftError::NegativeRate);
        }
        line.rate = value;
        line.amount = line.quantity * line.rate;
        Ok(())
    }

    /// Remove the row at `index`. Returns whether a row was removed;
    /// out-of-range indexes are ignored.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        true
    }

    /// Swap in a whole new set of rows. Used when a source document is
    /// selected and its lines displace whatever was in the table.
    pub(crate) fn replace(&mut self, lines: Vec<DraftLine>) {
        self.lines = lines;
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}
