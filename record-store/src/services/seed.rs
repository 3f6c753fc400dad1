//! Demo-account seed data.
//!
//! The first open of a demo snapshot preloads a small furniture-shop
//! catalog so every screen has rows to show before the user creates
//! anything of their own.

use crate::models::{
    CreateCustomer, CreateOperation, CreateProduct, CreateWorkstation, Customer, Operation,
    Product, Record, Workstation,
};
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// The catalog a fresh demo account starts with.
pub fn demo_snapshot() -> Result<Map<String, Value>, AppError> {
    let customers = vec![
        Customer::from_input(CreateCustomer {
            name: "Acme Traders".to_string(),
            email: Some("orders@acmetraders.example".to_string()),
            phone: Some("+1 555 0100".to_string()),
            address: Some("12 Harbor Road".to_string()),
        })?,
        Customer::from_input(CreateCustomer {
            name: "Blue Orchid Cafe".to_string(),
            email: Some("hello@blueorchid.example".to_string()),
            phone: None,
            address: Some("48 Mill Lane".to_string()),
        })?,
    ];

    let products = vec![
        Product::from_input(CreateProduct {
            name: "Oak Table".to_string(),
            description: Some("Solid oak, seats six".to_string()),
            unit: Some("pcs".to_string()),
            unit_price: Decimal::new(24000, 2),
        })?,
        Product::from_input(CreateProduct {
            name: "Pine Chair".to_string(),
            description: None,
            unit: Some("pcs".to_string()),
            unit_price: Decimal::new(8550, 2),
        })?,
        Product::from_input(CreateProduct {
            name: "Walnut Shelf".to_string(),
            description: Some("Wall-mounted, 120 cm".to_string()),
            unit: Some("pcs".to_string()),
            unit_price: Decimal::new(13225, 2),
        })?,
    ];

    let workstations = vec![
        Workstation::from_input(CreateWorkstation {
            name: "Assembly Bench".to_string(),
            wages_per_hour: Decimal::new(1800, 2),
        })?,
        Workstation::from_input(CreateWorkstation {
            name: "Finishing Booth".to_string(),
            wages_per_hour: Decimal::new(2150, 2),
        })?,
    ];

    let operations = vec![
        Operation::from_input(CreateOperation {
            name: "Cutting".to_string(),
            workstation_id: Some(workstations[0].id),
            hourly_cost: Decimal::new(2500, 2),
        })?,
        Operation::from_input(CreateOperation {
            name: "Sanding".to_string(),
            workstation_id: Some(workstations[1].id),
            hourly_cost: Decimal::new(1475, 2),
        })?,
        Operation::from_input(CreateOperation {
            name: "Assembly".to_string(),
            workstation_id: Some(workstations[0].id),
            hourly_cost: Decimal::new(2000, 2),
        })?,
    ];

    let mut snapshot = Map::new();
    snapshot.insert(
        Customer::collection().to_string(),
        serde_json::to_value(&customers)?,
    );
    snapshot.insert(
        Product::collection().to_string(),
        serde_json::to_value(&products)?,
    );
    snapshot.insert(
        Workstation::collection().to_string(),
        serde_json::to_value(&workstations)?,
    );
    snapshot.insert(
        Operation::collection().to_string(),
        serde_json::to_value(&operations)?,
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_snapshot_covers_the_catalog_collections() {
        let snapshot = demo_snapshot().unwrap();
        for collection in [
            Customer::collection(),
            Product::collection(),
            Workstation::collection(),
            Operation::collection(),
        ] {
            let records = snapshot
                .get(collection)
                .and_then(Value::as_array)
                .unwrap_or_else(|| panic!("missing {}", collection));
            assert!(!records.is_empty(), "{} seeded empty", collection);
        }
    }
}
