//! Snapshot-file persistence for demo accounts.
//!
//! Demo accounts never touch the network. Records live in one JSON file
//! shaped `{ "collection": [records] }`, loaded on open and written through
//! on every mutation, so a demo session survives restarts.

use crate::services::provider::PersistenceProvider;
use anyhow::anyhow;
use async_trait::async_trait;
use client_core::error::AppError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub struct SnapshotProvider {
    path: PathBuf,
    collections: RwLock<Map<String, Value>>,
}

impl SnapshotProvider {
    /// Open a snapshot file, starting empty when none exists yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        Self::open_with(path.as_ref(), Map::new()).await
    }

    /// Open a snapshot file, starting from `seed` when none exists yet.
    /// An existing file always wins over the seed.
    pub async fn open_seeded(
        path: impl AsRef<Path>,
        seed: Map<String, Value>,
    ) -> Result<Self, AppError> {
        Self::open_with(path.as_ref(), seed).await
    }

    async fn open_with(path: &Path, initial: Map<String, Value>) -> Result<Self, AppError> {
        let path = path.to_path_buf();
        if path.exists() {
            let raw = tokio::fs::read_to_string(&path).await?;
            let collections: Map<String, Value> = serde_json::from_str(&raw)?;
            info!(
                path = %path.display(),
                collections = collections.len(),
                "Snapshot loaded"
            );
            Ok(Self {
                path,
                collections: RwLock::new(collections),
            })
        } else {
            info!(
                path = %path.display(),
                seeded = !initial.is_empty(),
                "Starting new snapshot"
            );
            let provider = Self {
                path,
                collections: RwLock::new(initial),
            };
            let collections = provider.collections.read().await;
            provider.persist(&collections).await?;
            drop(collections);
            Ok(provider)
        }
    }

    async fn persist(&self, collections: &Map<String, Value>) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(collections)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl PersistenceProvider for SnapshotProvider {
    #[instrument(skip(self))]
    async fn list(&self, collection: &str) -> Result<Vec<Value>, AppError> {
        let collections = self.collections.read().await;
        let records = match collections.get(collection) {
            Some(Value::Array(items)) => items.clone(),
            Some(_) => {
                return Err(AppError::PersistenceError(anyhow!(
                    "Snapshot entry {} is not an array",
                    collection
                )))
            }
            None => Vec::new(),
        };
        debug!(count = records.len(), "Snapshot list");
        Ok(records)
    }

    #[instrument(skip(self, record))]
    async fn create(&self, collection: &str, record: Value) -> Result<Value, AppError> {
        let mut collections = self.collections.write().await;
        let entry = collections
            .entry(collection.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(items) = entry else {
            return Err(AppError::PersistenceError(anyhow!(
                "Snapshot entry {} is not an array",
                collection
            )));
        };
        items.push(record.clone());
        self.persist(&collections).await?;
        debug!("Snapshot record appended");
        Ok(record)
    }

    #[instrument(skip(self, record))]
    async fn update(&self, collection: &str, id: Uuid, record: Value) -> Result<Value, AppError> {
        let mut collections = self.collections.write().await;
        let target = id.to_string();
        let slot = collections
            .get_mut(collection)
            .and_then(Value::as_array_mut)
            .and_then(|items| {
                items.iter_mut().find(|item| {
                    item.get("id").and_then(Value::as_str) == Some(target.as_str())
                })
            })
            .ok_or_else(|| AppError::NotFound(anyhow!("No record {} in {}", id, collection)))?;
        *slot = record.clone();
        self.persist(&collections).await?;
        debug!("Snapshot record replaced");
        Ok(record)
    }
}
