//! Client-side record collections backing every table view.

use crate::models::{DocumentLine, Operation, Product, Record, SaleInvoice, SaleOrder};
use crate::services::provider::PersistenceProvider;
use client_core::error::AppError;
use draft_engine::{ReferenceEntity, ReferenceLookup, SourceDocument, SourceLookup};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// The loaded rows of one record type: kept in memory for synchronous reads
/// and written through the provider on every mutation.
pub struct Collection<T: Record> {
    provider: Arc<dyn PersistenceProvider>,
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// An empty collection; call [`refresh`](Self::refresh) to load rows.
    pub fn new(provider: Arc<dyn PersistenceProvider>) -> Self {
        Self {
            provider,
            records: Vec::new(),
        }
    }

    /// Reload every row from the provider, replacing the cache.
    #[instrument(skip(self), fields(collection = T::collection()))]
    pub async fn refresh(&mut self) -> Result<usize, AppError> {
        let raw = self.provider.list(T::collection()).await?;
        let mut records = Vec::with_capacity(raw.len());
        for value in raw {
            records.push(serde_json::from_value(value)?);
        }
        self.records = records;
        info!(count = self.records.len(), "Records loaded");
        Ok(self.records.len())
    }

    pub fn rows(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and persist a new record, then splice the stored
    /// representation into the cache.
    #[instrument(skip(self, input), fields(collection = T::collection()))]
    pub async fn create(&mut self, input: T::Create) -> Result<T, AppError> {
        let record = T::from_input(input)?;
        let stored = self
            .provider
            .create(T::collection(), serde_json::to_value(&record)?)
            .await?;
        let record: T = serde_json::from_value(stored)?;
        info!(id = %record.id(), "Record created");
        self.records.push(record.clone());
        Ok(record)
    }

    /// Persist a full replacement of an existing record.
    #[instrument(skip(self, record), fields(collection = T::collection()))]
    pub async fn update(&mut self, record: T) -> Result<T, AppError> {
        let stored = self
            .provider
            .update(T::collection(), record.id(), serde_json::to_value(&record)?)
            .await?;
        let record: T = serde_json::from_value(stored)?;
        info!(id = %record.id(), "Record updated");
        match self.records.iter().position(|r| r.id() == record.id()) {
            Some(index) => self.records[index] = record.clone(),
            None => self.records.push(record.clone()),
        }
        Ok(record)
    }
}

impl ReferenceLookup for Collection<Product> {
    fn resolve(&self, id: Uuid) -> Option<ReferenceEntity> {
        self.get(id).map(|product| ReferenceEntity {
            id: product.id,
            name: product.name.clone(),
            default_rate: product.unit_price,
        })
    }
}

impl ReferenceLookup for Collection<Operation> {
    fn resolve(&self, id: Uuid) -> Option<ReferenceEntity> {
        self.get(id).map(|operation| ReferenceEntity {
            id: operation.id,
            name: operation.name.clone(),
            default_rate: operation.hourly_cost,
        })
    }
}

impl SourceLookup for Collection<SaleOrder> {
    fn resolve(&self, id: Uuid) -> Option<SourceDocument> {
        self.get(id).map(|order| SourceDocument {
            customer_id: order.customer_id,
            lines: order.lines.iter().map(DocumentLine::to_source_line).collect(),
        })
    }
}

impl SourceLookup for Collection<SaleInvoice> {
    fn resolve(&self, id: Uuid) -> Option<SourceDocument> {
        self.get(id).map(|invoice| SourceDocument {
            customer_id: invoice.customer_id,
            lines: invoice
                .lines
                .iter()
                .map(DocumentLine::to_source_line)
                .collect(),
        })
    }
}
