//! Additional-wage contribution calculation.
//!
//! Additional wages are bonuses and other non-recurring payments, subject
//! to a separate annual-equivalent ceiling that is much higher than the
//! monthly ordinary-wage ceiling.

use rust_decimal::Decimal;

/// Returns the additional-wage ceiling of 102000.
pub fn additional_wage_ceiling() -> Decimal {
    Decimal::new(102_000, 0)
}

/// The result of the additional-wage contribution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdditionalWageContribution {
    /// Combined bonus and additional wages after applying the ceiling.
    pub capped_wages: Decimal,
    /// Contribution on the capped wages at the bracket's total rate.
    pub contribution: Decimal,
}

/// Calculates the contribution on additional wages.
///
/// Bonus is folded into the additional-wage base together with the other
/// non-recurring wages; the combined base is capped at
/// `additional_wage_ceiling()` before the rate is applied.
///
/// # Examples
///
/// ```
/// use cpf_engine::calculation::calculate_additional_wage_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_additional_wage_contribution(
///     Decimal::from_str("2000").unwrap(),
///     Decimal::from_str("1000").unwrap(),
///     Decimal::from_str("0.37").unwrap(),
/// );
/// assert_eq!(result.capped_wages, Decimal::from_str("3000").unwrap());
/// assert_eq!(result.contribution, Decimal::from_str("1110").unwrap());
/// ```
pub fn calculate_additional_wage_contribution(
    bonus: Decimal,
    additional_wages: Decimal,
    total_rate: Decimal,
) -> AdditionalWageContribution {
    let capped_wages = (bonus + additional_wages).min(additional_wage_ceiling());
    AdditionalWageContribution {
        capped_wages,
        contribution: capped_wages * total_rate,
    }
}
