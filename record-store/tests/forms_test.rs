//! Document form integration tests: the full modal flow against a snapshot
//! provider, plus failure-path behavior with a dead provider.

mod common;

use anyhow::anyhow;
use async_trait::async_trait;
use client_core::error::AppError;
use draft_engine::{BindOutcome, DocumentKind, DraftError};
use record_store::models::{
    BillOfMaterials, CreateOperation, CreateProduct, Operation, Product, SaleInvoice, SaleOrder,
};
use record_store::services::forms::DocumentForm;
use record_store::services::provider::PersistenceProvider;
use record_store::services::store::Collection;
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Provider standing in for an unreachable API.
struct FailingProvider;

#[async_trait]
impl PersistenceProvider for FailingProvider {
    async fn list(&self, _collection: &str) -> Result<Vec<Value>, AppError> {
        Err(AppError::PersistenceError(anyhow!("API offline")))
    }

    async fn create(&self, _collection: &str, _record: Value) -> Result<Value, AppError> {
        Err(AppError::PersistenceError(anyhow!("API offline")))
    }

    async fn update(&self, _collection: &str, _id: Uuid, _record: Value) -> Result<Value, AppError> {
        Err(AppError::PersistenceError(anyhow!("API offline")))
    }
}

/// Seed a product catalog with known prices: Widget at 100, Gadget at 50.
async fn product_catalog(
    provider: Arc<record_store::services::snapshot::SnapshotProvider>,
) -> Collection<Product> {
    let mut products = Collection::<Product>::new(provider);
    for (name, price) in [("Widget", 100), ("Gadget", 50)] {
        products
            .create(CreateProduct {
                name: name.to_string(),
                description: None,
                unit: None,
                unit_price: Decimal::from(price),
            })
            .await
            .expect("Failed to create product");
    }
    products
}

#[tokio::test]
async fn new_order_submits_with_derived_totals() {
    let (_dir, provider) = common::snapshot_provider().await;
    let products = product_catalog(provider.clone()).await;
    let mut orders = Collection::<SaleOrder>::new(provider);

    let mut form = DocumentForm::new(DocumentKind::SaleOrder);
    form.draft_mut()
        .set_customer(Some(Uuid::new_v4()))
        .expect("Customer should be editable");
    for product in products.rows().to_vec() {
        form.draft_mut().add_item(product.id, &products);
    }
    form.draft_mut()
        .set_tax_percent(Decimal::TEN)
        .expect("Tax should be accepted");
    form.draft_mut()
        .set_discount_percent(Decimal::from(5))
        .expect("Discount should be accepted");

    let expected = form.draft().totals();
    let saved = form.submit_order(&mut orders).await.expect("Failed to submit");

    assert_eq!(saved.subtotal, Decimal::from(150));
    assert_eq!(saved.subtotal, expected.subtotal);
    assert_eq!(saved.grand_total, Decimal::new(1575, 1));
    assert_eq!(saved.grand_total, expected.grand_total);
    assert_eq!(orders.rows().len(), 1);
    assert!(form.is_editing());
}

#[tokio::test]
async fn submit_without_customer_is_rejected() {
    let (_dir, provider) = common::snapshot_provider().await;
    let products = product_catalog(provider.clone()).await;
    let mut orders = Collection::<SaleOrder>::new(provider);

    let mut form = DocumentForm::new(DocumentKind::SaleOrder);
    form.draft_mut().add_item(products.rows()[0].id, &products);

    let err = form.submit_order(&mut orders).await.unwrap_err();
    assert_eq!(err.user_message(), "Select a customer before saving");
    assert_eq!(form.draft().items().len(), 1);
    assert!(orders.is_empty());
}

#[tokio::test]
async fn submit_without_items_is_rejected() {
    let (_dir, provider) = common::snapshot_provider().await;
    let mut orders = Collection::<SaleOrder>::new(provider);

    let mut form = DocumentForm::new(DocumentKind::SaleOrder);
    form.draft_mut()
        .set_customer(Some(Uuid::new_v4()))
        .expect("Customer should be editable");

    let err = form.submit_order(&mut orders).await.unwrap_err();
    assert_eq!(err.user_message(), "Add at least one item");
    assert!(orders.is_empty());
}

#[tokio::test]
async fn generated_invoice_respects_order_ceilings() {
    let (_dir, provider) = common::snapshot_provider().await;
    let products = product_catalog(provider.clone()).await;
    let mut orders = Collection::<SaleOrder>::new(provider.clone());
    let mut invoices = Collection::<SaleInvoice>::new(provider);

    // An order for ten Widgets at a negotiated rate of 5.
    let mut order_form = DocumentForm::new(DocumentKind::SaleOrder);
    let customer_id = Uuid::new_v4();
    order_form
        .draft_mut()
        .set_customer(Some(customer_id))
        .expect("Customer should be editable");
    order_form.draft_mut().add_item(products.rows()[0].id, &products);
    order_form
        .draft_mut()
        .set_quantity(0, Decimal::TEN)
        .expect("Quantity should be accepted");
    order_form
        .draft_mut()
        .set_rate(0, Decimal::from(5))
        .expect("Rate should be accepted");
    let order = order_form
        .submit_order(&mut orders)
        .await
        .expect("Failed to submit order");

    let (mut form, outcome) =
        DocumentForm::generate(DocumentKind::SaleInvoice, order.id, &orders, &products);
    assert_eq!(outcome, BindOutcome::Bound { lines: 1 });
    assert_eq!(form.draft().customer_id(), Some(customer_id));
    assert!(form.draft().customer_locked());
    assert_eq!(form.draft().items()[0].amount, Decimal::from(50));

    assert_eq!(
        form.draft_mut().set_quantity(0, Decimal::from(15)),
        Err(DraftError::QuantityExceedsSource { max: Decimal::TEN })
    );
    form.draft_mut()
        .set_quantity(0, Decimal::from(8))
        .expect("Quantity within the ceiling should be accepted");

    let invoice = form
        .submit_invoice(&mut invoices)
        .await
        .expect("Failed to submit invoice");
    assert_eq!(invoice.order_id, Some(order.id));
    assert_eq!(invoice.subtotal, Decimal::from(40));
    assert_eq!(invoice.grand_total, invoice.subtotal);
}

#[tokio::test]
async fn editing_updates_in_place() {
    let (_dir, provider) = common::snapshot_provider().await;
    let products = product_catalog(provider.clone()).await;
    let mut orders = Collection::<SaleOrder>::new(provider);

    let mut form = DocumentForm::new(DocumentKind::SaleOrder);
    form.draft_mut()
        .set_customer(Some(Uuid::new_v4()))
        .expect("Customer should be editable");
    form.draft_mut().add_item(products.rows()[0].id, &products);
    let saved = form.submit_order(&mut orders).await.expect("Failed to submit");

    let mut edit = DocumentForm::edit_order(&saved);
    edit.draft_mut()
        .set_quantity(0, Decimal::from(3))
        .expect("Edited lines carry no ceiling");
    let updated = edit.submit_order(&mut orders).await.expect("Failed to resubmit");

    assert_eq!(orders.rows().len(), 1);
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.created_utc, saved.created_utc);
    assert_eq!(updated.subtotal, Decimal::from(300));
}

#[tokio::test]
async fn failed_submit_keeps_the_draft_for_retry() {
    let (_dir, provider) = common::snapshot_provider().await;
    let products = product_catalog(provider.clone()).await;
    let mut dead_orders = Collection::<SaleOrder>::new(Arc::new(FailingProvider));
    let mut orders = Collection::<SaleOrder>::new(provider);

    let mut form = DocumentForm::new(DocumentKind::SaleOrder);
    form.draft_mut()
        .set_customer(Some(Uuid::new_v4()))
        .expect("Customer should be editable");
    form.draft_mut().add_item(products.rows()[0].id, &products);

    let err = form.submit_order(&mut dead_orders).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.user_message(), "Could not save your changes");
    assert_eq!(form.draft().items().len(), 1);
    assert!(!form.is_editing());

    let saved = form.submit_order(&mut orders).await.expect("Retry should succeed");
    assert_eq!(saved.subtotal, Decimal::from(100));
    assert_eq!(orders.rows().len(), 1);
}

#[tokio::test]
async fn bom_requires_a_product_before_saving() {
    let (_dir, provider) = common::snapshot_provider().await;
    let mut operations = Collection::<Operation>::new(provider.clone());
    let cutting = operations
        .create(CreateOperation {
            name: "Cutting".to_string(),
            workstation_id: None,
            hourly_cost: Decimal::from(25),
        })
        .await
        .expect("Failed to create operation");
    let mut boms = Collection::<BillOfMaterials>::new(provider);

    let mut form = DocumentForm::new(DocumentKind::BillOfMaterials);
    form.draft_mut().add_item(cutting.id, &operations);

    let err = form.submit_bom(&mut boms).await.unwrap_err();
    assert_eq!(err.user_message(), "Select a product before saving");

    form.set_product(Some(Uuid::new_v4()));
    let bom = form.submit_bom(&mut boms).await.expect("Failed to submit");
    assert_eq!(bom.subtotal, Decimal::from(25));
    assert_eq!(bom.grand_total, bom.subtotal);
}
