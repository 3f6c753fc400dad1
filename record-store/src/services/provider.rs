//! The persistence boundary every record write and read goes through.

use crate::services::remote::RemoteProvider;
use crate::services::seed;
use crate::services::snapshot::SnapshotProvider;
use async_trait::async_trait;
use client_core::config::{AccountMode, Config};
use client_core::error::AppError;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Stores and serves raw record representations, keyed by collection name.
///
/// Nothing above this trait branches on the account mode; callers talk to
/// whichever implementation [`from_config`] selected at startup.
#[async_trait]
pub trait PersistenceProvider: Send + Sync {
    /// Every record of one collection.
    async fn list(&self, collection: &str) -> Result<Vec<Value>, AppError>;

    /// Persist a new record and return the stored representation.
    async fn create(&self, collection: &str, record: Value) -> Result<Value, AppError>;

    /// Replace an existing record wholesale. `NotFound` when the id has
    /// never been stored.
    async fn update(&self, collection: &str, id: Uuid, record: Value) -> Result<Value, AppError>;
}

/// Build the provider the account mode calls for: the remote API for
/// standard accounts, a seeded local snapshot for demo accounts.
pub async fn from_config(config: &Config) -> Result<Arc<dyn PersistenceProvider>, AppError> {
    match config.account_mode {
        AccountMode::Standard => {
            info!(base_url = %config.api_base_url, "Using remote persistence");
            Ok(Arc::new(RemoteProvider::new(config.api_base_url.clone())))
        }
        AccountMode::Demo => {
            info!(path = %config.snapshot_path, "Using snapshot persistence");
            let provider =
                SnapshotProvider::open_seeded(&config.snapshot_path, seed::demo_snapshot()?)
                    .await?;
            Ok(Arc::new(provider))
        }
    }
}
