//! Workstation records.

use super::{require_non_negative, Record};
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A place on the shop floor where operations run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workstation {
    pub id: Uuid,
    pub name: String,
    pub wages_per_hour: Decimal,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a workstation.
#[derive(Debug, Clone, Validate)]
pub struct CreateWorkstation {
    #[validate(length(min = 1, message = "Workstation name is required"))]
    pub name: String,
    pub wages_per_hour: Decimal,
}

impl Record for Workstation {
    type Create = CreateWorkstation;

    fn collection() -> &'static str {
        "workstations"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_input(input: CreateWorkstation) -> Result<Self, AppError> {
        input.validate()?;
        require_non_negative("Wages per hour", input.wages_per_hour)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            wages_per_hour: input.wages_per_hour,
            created_utc: Utc::now(),
        })
    }
}
