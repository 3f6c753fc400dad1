//! REST-backed persistence for standard accounts.

use crate::services::provider::PersistenceProvider;
use anyhow::anyhow;
use async_trait::async_trait;
use client_core::error::AppError;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Talks to the ERP API: one REST resource per collection, JSON bodies.
/// Auth-header injection lives in the shell's client construction, not here.
#[derive(Clone)]
pub struct RemoteProvider {
    client: Client,
    base_url: String,
}

impl RemoteProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Reuse a preconfigured client, e.g. one carrying default headers.
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: Uuid) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }
}

#[async_trait]
impl PersistenceProvider for RemoteProvider {
    #[instrument(skip(self))]
    async fn list(&self, collection: &str) -> Result<Vec<Value>, AppError> {
        let url = self.collection_url(collection);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::PersistenceError(anyhow!("Request to {} failed: {}", url, e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::PersistenceError(anyhow!("Reading {} response failed: {}", collection, e))
        })?;

        debug!(status = %status, "List response received");

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(AppError::PersistenceError(anyhow!(
                "Failed to load {}: {} - {}",
                collection,
                status,
                body
            )))
        }
    }

    #[instrument(skip(self, record))]
    async fn create(&self, collection: &str, record: Value) -> Result<Value, AppError> {
        let url = self.collection_url(collection);

        let response = self
            .client
            .post(&url)
            .json(&record)
            .send()
            .await
            .map_err(|e| {
                AppError::PersistenceError(anyhow!("Request to {} failed: {}", url, e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::PersistenceError(anyhow!("Reading {} response failed: {}", collection, e))
        })?;

        debug!(status = %status, "Create response received");

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else if status == StatusCode::CONFLICT {
            Err(AppError::Conflict(anyhow!(
                "Conflicting record in {}: {}",
                collection,
                body
            )))
        } else {
            Err(AppError::PersistenceError(anyhow!(
                "Failed to save to {}: {} - {}",
                collection,
                status,
                body
            )))
        }
    }

    #[instrument(skip(self, record))]
    async fn update(&self, collection: &str, id: Uuid, record: Value) -> Result<Value, AppError> {
        let url = self.record_url(collection, id);

        let response = self
            .client
            .put(&url)
            .json(&record)
            .send()
            .await
            .map_err(|e| {
                AppError::PersistenceError(anyhow!("Request to {} failed: {}", url, e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::PersistenceError(anyhow!("Reading {} response failed: {}", collection, e))
        })?;

        debug!(status = %status, "Update response received");

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else if status == StatusCode::NOT_FOUND {
            Err(AppError::NotFound(anyhow!(
                "No record {} in {}",
                id,
                collection
            )))
        } else if status == StatusCode::CONFLICT {
            Err(AppError::Conflict(anyhow!(
                "Conflicting record in {}: {}",
                collection,
                body
            )))
        } else {
            Err(AppError::PersistenceError(anyhow!(
                "Failed to save to {}: {} - {}",
                collection,
                status,
                body
            )))
        }
    }
}
