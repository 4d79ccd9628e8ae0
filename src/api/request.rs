//! Request types for the CPF contribution engine API.
//!
//! This module defines the JSON request structures for the calculation,
//! bulk, history, and rate-update endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeGroup, CitizenshipStatus, SalaryDetails};
use crate::processing::CalculationInput;

/// Request body for the `/calculate` endpoint, and one element of a bulk
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The employee's citizenship status.
    pub citizenship: CitizenshipStatus,
    /// The employee's age group.
    pub age_group: AgeGroup,
    /// The salary components for the period.
    pub salary_details: SalaryDetailsRequest,
}

/// Salary components in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryDetailsRequest {
    /// The recurring monthly wage.
    pub basic_salary: Decimal,
    /// Bonus payments for the period.
    #[serde(default)]
    pub bonus: Decimal,
    /// Other non-recurring wages for the period.
    #[serde(default)]
    pub additional_wages: Decimal,
}

/// Request body for the `/calculate-bulk` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCalculationRequest {
    /// The employees to process, at most 1000 per batch.
    pub employees: Vec<CalculationRequest>,
}

/// Request body for the `/rates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateUpdateRequest {
    /// The citizenship half of the bracket to update.
    pub citizenship: CitizenshipStatus,
    /// The age-group half of the bracket to update.
    pub age_group: AgeGroup,
    /// The employee's new share, in [0, 1].
    pub employee_share: Decimal,
    /// The employer's new share, in [0, 1].
    pub employer_share: Decimal,
}

impl RateUpdateRequest {
    /// Checks both shares lie in [0, 1].
    ///
    /// The rate table itself accepts whatever it is given; range
    /// enforcement belongs to this boundary.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("employee_share", self.employee_share),
            ("employer_share", self.employer_share),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EngineError::InvalidShare {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Query parameters for the `/history/:employee_id` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    /// Inclusive lower bound on the calculation date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the calculation date.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl HistoryQuery {
    /// Rejects ranges whose start date falls after their end date.
    pub fn validate(&self) -> EngineResult<()> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(EngineError::InvalidDateRange { start, end });
            }
        }
        Ok(())
    }
}

impl From<SalaryDetailsRequest> for SalaryDetails {
    fn from(req: SalaryDetailsRequest) -> Self {
        SalaryDetails {
            basic_salary: req.basic_salary,
            bonus: req.bonus,
            additional_wages: req.additional_wages,
        }
    }
}

impl From<CalculationRequest> for CalculationInput {
    fn from(req: CalculationRequest) -> Self {
        CalculationInput {
            employee_id: req.employee_id,
            citizenship: req.citizenship,
            age_group: req.age_group,
            salary_details: req.salary_details.into(),
        }
    }
}
