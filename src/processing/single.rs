//! Single-record calculation paths.

use crate::calculation::calculate_contribution;
use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{
    AgeGroup, CalculationRecord, CitizenshipStatus, ContributionResult, NewCalculationRecord,
    SalaryDetails,
};
use crate::store::RecordStore;

/// Everything needed to calculate contributions for one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationInput {
    /// The employee the calculation is for.
    pub employee_id: String,
    /// The employee's citizenship status.
    pub citizenship: CitizenshipStatus,
    /// The employee's age group.
    pub age_group: AgeGroup,
    /// The salary components for the period.
    pub salary_details: SalaryDetails,
}

/// Validates the input, looks up the bracket's rates, and calculates the
/// contribution breakdown. Nothing is persisted.
///
/// The rate lookup happens once, up front: an update to the rate table
/// while the calculation is in flight does not affect it.
pub fn calculate_for_employee(
    rates: &RateTable,
    input: &CalculationInput,
) -> EngineResult<ContributionResult> {
    input.salary_details.validate()?;
    let entry = rates.get(input.citizenship, input.age_group)?;
    Ok(calculate_contribution(&entry, &input.salary_details))
}

/// Calculates and persists in one step, returning the stored record.
///
/// Reuses [`calculate_for_employee`] so the two paths cannot drift; the
/// record is only appended after a successful calculation.
pub fn calculate_and_record(
    rates: &RateTable,
    store: &dyn RecordStore,
    input: &CalculationInput,
) -> EngineResult<CalculationRecord> {
    let contributions = calculate_for_employee(rates, input)?;
    store.append(NewCalculationRecord {
        employee_id: input.employee_id.clone(),
        citizenship: input.citizenship,
        age_group: input.age_group,
        salary_details: input.salary_details,
        contributions,
    })
}
