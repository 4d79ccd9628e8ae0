//! Salary input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The salary components a contribution is calculated from.
///
/// `basic_salary` is the recurring monthly wage and is required to be
/// positive. `bonus` and `additional_wages` are non-recurring payments and
/// default to zero when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryDetails {
    /// The recurring monthly wage.
    pub basic_salary: Decimal,
    /// Bonus payments for the period.
    #[serde(default)]
    pub bonus: Decimal,
    /// Other non-recurring wages for the period.
    #[serde(default)]
    pub additional_wages: Decimal,
}

impl SalaryDetails {
    /// Checks the salary components at the boundary.
    ///
    /// A zero or negative `basic_salary` is rejected rather than treated as
    /// a zero-contribution case, and negative optional components are
    /// rejected rather than clamped.
    pub fn validate(&self) -> EngineResult<()> {
        if self.basic_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                field: "basic_salary".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.bonus < Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                field: "bonus".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.additional_wages < Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                field: "additional_wages".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// The uncapped gross salary: basic salary plus bonus plus additional
    /// wages, from the raw inputs.
    pub fn gross(&self) -> Decimal {
        self.basic_salary + self.bonus + self.additional_wages
    }
}
