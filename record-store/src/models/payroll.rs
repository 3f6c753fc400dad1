//! Payroll records.

use super::{require_non_negative, Record};
use chrono::{DateTime, Utc};
use client_core::error::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One month's salary entry for an employee. `month` is a tag like
/// "2026-04"; payroll keeps no link into the document side of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
    pub id: Uuid,
    pub employee_name: String,
    pub designation: Option<String>,
    pub monthly_salary: Decimal,
    pub month: String,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a payroll record.
#[derive(Debug, Clone, Validate)]
pub struct CreatePayrollRecord {
    #[validate(length(min = 1, message = "Employee name is required"))]
    pub employee_name: String,
    pub designation: Option<String>,
    pub monthly_salary: Decimal,
    #[validate(length(min = 1, message = "Month is required"))]
    pub month: String,
}

impl Record for PayrollRecord {
    type Create = CreatePayrollRecord;

    fn collection() -> &'static str {
        "payroll_records"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_input(input: CreatePayrollRecord) -> Result<Self, AppError> {
        input.validate()?;
        require_non_negative("Monthly salary", input.monthly_salary)?;
        Ok(Self {
            id: Uuid::new_v4(),
            employee_name: input.employee_name,
            designation: input.designation,
            monthly_salary: input.monthly_salary,
            month: input.month,
            created_utc: Utc::now(),
        })
    }
}
