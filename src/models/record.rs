//! Stored calculation record models.
//!
//! A [`CalculationRecord`] is created once per successful
//! calculate-and-save operation and is immutable thereafter; the record
//! store exclusively owns the collection of records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AgeGroup, CitizenshipStatus, ContributionResult, SalaryDetails};

/// A persisted contribution calculation.
///
/// Captures a snapshot of the inputs and the resulting breakdown together
/// with the generated identifier and timestamp. Records are never updated
/// or deleted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Unique identifier assigned by the store.
    pub id: Uuid,
    /// The employee the calculation was performed for.
    pub employee_id: String,
    /// Citizenship status at calculation time.
    pub citizenship: CitizenshipStatus,
    /// Age group at calculation time.
    pub age_group: AgeGroup,
    /// Snapshot of the salary inputs.
    pub salary_details: SalaryDetails,
    /// Snapshot of the calculated breakdown.
    pub contributions: ContributionResult,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
}

/// The storable form of a calculation, before the store assigns an
/// identifier and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculationRecord {
    /// The employee the calculation was performed for.
    pub employee_id: String,
    /// Citizenship status at calculation time.
    pub citizenship: CitizenshipStatus,
    /// Age group at calculation time.
    pub age_group: AgeGroup,
    /// Snapshot of the salary inputs.
    pub salary_details: SalaryDetails,
    /// Snapshot of the calculated breakdown.
    pub contributions: ContributionResult,
}
