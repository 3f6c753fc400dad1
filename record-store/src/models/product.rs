//! Product records.

use super::{require_non_negative, Record};
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A product the business sells or manufactures. `unit_price` is the
/// default rate a new document line starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub unit_price: Decimal,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a product.
#[derive(Debug, Clone, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub unit_price: Decimal,
}

impl Record for Product {
    type Create = CreateProduct;

    fn collection() -> &'static str {
        "products"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_input(input: CreateProduct) -> Result<Self, AppError> {
        input.validate()?;
        require_non_negative("Unit price", input.unit_price)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            unit: input.unit,
            unit_price: input.unit_price,
            created_utc: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_unit_price_is_rejected() {
        let result = Product::from_input(CreateProduct {
            name: "Oak Table".to_string(),
            description: None,
            unit: Some("pcs".to_string()),
            unit_price: Decimal::from(-1),
        });
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
