//! Manufacturing operation records.

use super::{require_non_negative, Record};
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A manufacturing step, optionally tied to the workstation where it runs.
/// `hourly_cost` is the default rate when the operation goes onto a bill of
/// materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub id: Uuid,
    pub name: String,
    pub workstation_id: Option<Uuid>,
    pub hourly_cost: Decimal,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating an operation.
#[derive(Debug, Clone, Validate)]
pub struct CreateOperation {
    #[validate(length(min = 1, message = "Operation name is required"))]
    pub name: String,
    pub workstation_id: Option<Uuid>,
    pub hourly_cost: Decimal,
}

impl Record for Operation {
    type Create = CreateOperation;

    fn collection() -> &'static str {
        "operations"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_input(input: CreateOperation) -> Result<Self, AppError> {
        input.validate()?;
        require_non_negative("Hourly cost", input.hourly_cost)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            workstation_id: input.workstation_id,
            hourly_cost: input.hourly_cost,
            created_utc: Utc::now(),
        })
    }
}
