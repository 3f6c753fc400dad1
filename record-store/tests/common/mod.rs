//! Shared setup for record-store integration tests.

use record_store::services::snapshot::SnapshotProvider;
use std::sync::Arc;
use tempfile::TempDir;

/// Snapshot provider in a fresh temp dir. The dir is returned so callers
/// keep it alive for the life of the test.
pub async fn snapshot_provider() -> (TempDir, Arc<SnapshotProvider>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("snapshot.json");
    let provider = SnapshotProvider::open(&path)
        .await
        .expect("Failed to open snapshot");
    (dir, Arc::new(provider))
}
