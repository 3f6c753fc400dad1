//! Invoice to return workflow tests.
//!
//! A return generated from an invoice can only send back what was invoiced.
//! Clearing the source turns it back into a free-form document.

mod common;

use draft_engine::{BindOutcome, DocumentKind, DraftError};
use record_store::services::DocumentForm;
use rust_decimal::Decimal;

#[tokio::test]
async fn return_is_capped_by_the_invoiced_quantity() {
    let mut ctx = common::setup().await;

    let customer = ctx.customers.rows()[0].clone();
    let product = ctx
        .product_named("Walnut Shelf")
        .expect("Missing seeded product");

    // Invoice three units directly, without an order behind it.
    let mut invoice_form = DocumentForm::new(DocumentKind::SaleInvoice);
    invoice_form
        .draft_mut()
        .set_customer(Some(customer.id))
        .expect("Failed to set customer");
    invoice_form.draft_mut().add_item(product.id, &ctx.products);
    invoice_form
        .draft_mut()
        .set_quantity(0, Decimal::from(3))
        .expect("Failed to set quantity");
    invoice_form
        .draft_mut()
        .set_rate(0, Decimal::from(120))
        .expect("Failed to set rate");
    let invoice = invoice_form
        .submit_invoice(&mut ctx.invoices)
        .await
        .expect("Failed to save sale invoice");
    assert_eq!(invoice.order_id, None);
    assert_eq!(invoice.grand_total, Decimal::from(360));

    // Generate the return; quantities are capped at what was invoiced.
    let (mut return_form, outcome) = DocumentForm::generate(
        DocumentKind::SaleReturn,
        invoice.id,
        &ctx.invoices,
        &ctx.products,
    );
    assert_eq!(outcome, BindOutcome::Bound { lines: 1 });
    assert_eq!(
        return_form.draft_mut().set_quantity(0, Decimal::from(5)),
        Err(DraftError::QuantityExceedsSource {
            max: Decimal::from(3)
        })
    );

    // Send one unit back with a restocking discount; returns carry charges.
    return_form
        .draft_mut()
        .set_quantity(0, Decimal::ONE)
        .expect("Failed to set quantity");
    return_form
        .draft_mut()
        .set_discount_percent(Decimal::TEN)
        .expect("Failed to set discount");
    let sale_return = return_form
        .submit_return(&mut ctx.returns)
        .await
        .expect("Failed to save sale return");

    assert_eq!(sale_return.invoice_id, Some(invoice.id));
    assert_eq!(sale_return.customer_id, customer.id);
    assert_eq!(sale_return.subtotal, Decimal::from(120));
    assert_eq!(sale_return.grand_total, Decimal::from(108));
}

#[tokio::test]
async fn clearing_the_source_unlocks_the_return() {
    let mut ctx = common::setup().await;

    let customer = ctx.customers.rows()[0].clone();
    let other_customer = ctx.customers.rows()[1].clone();
    let product = ctx
        .product_named("Pine Chair")
        .expect("Missing seeded product");

    let mut invoice_form = DocumentForm::new(DocumentKind::SaleInvoice);
    invoice_form
        .draft_mut()
        .set_customer(Some(customer.id))
        .expect("Failed to set customer");
    invoice_form.draft_mut().add_item(product.id, &ctx.products);
    let invoice = invoice_form
        .submit_invoice(&mut ctx.invoices)
        .await
        .expect("Failed to save sale invoice");

    let (mut return_form, _) = DocumentForm::generate(
        DocumentKind::SaleReturn,
        invoice.id,
        &ctx.invoices,
        &ctx.products,
    );

    // While the source is bound the customer comes from the invoice.
    assert_eq!(
        return_form
            .draft_mut()
            .set_customer(Some(other_customer.id)),
        Err(DraftError::CustomerLocked)
    );

    // Clearing the source empties the rows and frees the customer.
    return_form.draft_mut().clear_source();
    assert!(return_form.draft().items().is_empty());
    assert!(!return_form.draft().customer_locked());

    return_form
        .draft_mut()
        .set_customer(Some(other_customer.id))
        .expect("Failed to set customer");
    return_form.draft_mut().add_item(product.id, &ctx.products);

    let sale_return = return_form
        .submit_return(&mut ctx.returns)
        .await
        .expect("Failed to save sale return");
    assert_eq!(sale_return.invoice_id, None);
    assert_eq!(sale_return.customer_id, other_customer.id);
}
