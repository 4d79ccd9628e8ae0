//! Contribution calculation output model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The breakdown produced by a contribution calculation.
///
/// All fields are derived: `total_contribution` is the sum of the capped
/// ordinary-wage and additional-wage contributions, the employee/employer
/// split is proportional to their shares of the total rate, and
/// `net_salary` is `gross_salary` minus the employee contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionResult {
    /// The employee's portion of the total contribution.
    pub employee_contribution: Decimal,
    /// The employer's portion of the total contribution.
    pub employer_contribution: Decimal,
    /// The combined contribution across both wage components.
    pub total_contribution: Decimal,
    /// The uncapped gross salary from the raw inputs.
    pub gross_salary: Decimal,
    /// Gross salary less the employee contribution.
    pub net_salary: Decimal,
}
