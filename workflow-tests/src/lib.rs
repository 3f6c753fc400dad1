//! Cross-crate workflow integration tests library.
//!
//! Provides test infrastructure for exercising complete user journeys across
//! the client crates: a seeded demo account, loaded record collections, and
//! document forms driving drafts from catalog pick to saved record.
//!
//! ## Usage
//!
//! ```bash
//! cargo test -p workflow-tests
//! ```

use anyhow::Result;
use client_core::config::{AccountMode, Config};
use record_store::models::{
    BillOfMaterials, Customer, Operation, PayrollRecord, Product, SaleInvoice, SaleOrder,
    SaleReturn, Workstation,
};
use record_store::services::{provider, Collection, PersistenceProvider};
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,workflow_tests=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Demo-mode configuration with the snapshot stored inside `dir`.
pub fn demo_config(dir: &TempDir) -> Config {
    Config {
        account_mode: AccountMode::Demo,
        api_base_url: "http://localhost:8080/api".to_string(),
        snapshot_path: dir
            .path()
            .join("snapshot.json")
            .to_string_lossy()
            .into_owned(),
        log_level: "info".to_string(),
    }
}

/// Context for workflow tests with every record collection loaded.
///
/// Each test creates its own context over a freshly seeded demo snapshot in
/// a temporary directory, so tests stay isolated from each other.
pub struct WorkflowTestContext {
    /// Keeps the snapshot directory alive for the duration of the test.
    _dir: TempDir,
    pub provider: Arc<dyn PersistenceProvider>,

    // Record collections
    pub customers: Collection<Customer>,
    pub products: Collection<Product>,
    pub operations: Collection<Operation>,
    pub workstations: Collection<Workstation>,
    pub payroll: Collection<PayrollRecord>,
    pub orders: Collection<SaleOrder>,
    pub invoices: Collection<SaleInvoice>,
    pub returns: Collection<SaleReturn>,
    pub boms: Collection<BillOfMaterials>,
}

impl WorkflowTestContext {
    /// Create a new workflow test context over a freshly seeded demo account.
    ///
    /// Boots the same way the app does for a demo user: the configuration
    /// selects the snapshot provider, the seed fills the catalog, and every
    /// collection is refreshed before the test body runs.
    pub async fn new() -> Result<Self> {
        init_tracing();

        let dir = TempDir::new()?;
        let config = demo_config(&dir);
        let provider = provider::from_config(&config).await?;

        let mut context = Self {
            _dir: dir,
            provider: provider.clone(),
            customers: Collection::new(provider.clone()),
            products: Collection::new(provider.clone()),
            operations: Collection::new(provider.clone()),
            workstations: Collection::new(provider.clone()),
            payroll: Collection::new(provider.clone()),
            orders: Collection::new(provider.clone()),
            invoices: Collection::new(provider.clone()),
            returns: Collection::new(provider.clone()),
            boms: Collection::new(provider),
        };
        context.refresh_all().await?;
        Ok(context)
    }

    /// Reload every collection from the provider.
    pub async fn refresh_all(&mut self) -> Result<()> {
        self.customers.refresh().await?;
        self.products.refresh().await?;
        self.operations.refresh().await?;
        self.workstations.refresh().await?;
        self.payroll.refresh().await?;
        self.orders.refresh().await?;
        self.invoices.refresh().await?;
        self.returns.refresh().await?;
        self.boms.refresh().await?;
        Ok(())
    }

    /// Find a seeded product by name.
    pub fn product_named(&self, name: &str) -> Option<Product> {
        self.products.rows().iter().find(|p| p.name == name).cloned()
    }

    /// Find a seeded operation by name.
    pub fn operation_named(&self, name: &str) -> Option<Operation> {
        self.operations
            .rows()
            .iter()
            .find(|o| o.name == name)
            .cloned()
    }
}
