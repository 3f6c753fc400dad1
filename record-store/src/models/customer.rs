//! Customer records.

use super::Record;
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A customer the business sells to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a customer.
#[derive(Debug, Clone, Validate)]
pub struct CreateCustomer {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Record for Customer {
    type Create = CreateCustomer;

    fn collection() -> &'static str {
        "customers"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_input(input: CreateCustomer) -> Result<Self, AppError> {
        input.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
            created_utc: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let result = Customer::from_input(CreateCustomer {
            name: String::new(),
            email: None,
            phone: None,
            address: None,
        });
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let result = Customer::from_input(CreateCustomer {
            name: "Acme Traders".to_string(),
            email: Some("not-an-email".to_string()),
            phone: None,
            address: None,
        });
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
