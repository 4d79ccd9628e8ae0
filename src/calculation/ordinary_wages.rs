//! Ordinary-wage contribution calculation.
//!
//! Ordinary wages are the recurring monthly salary, subject to a monthly
//! ceiling for contribution purposes.

use rust_decimal::Decimal;

/// Returns the monthly ordinary-wage ceiling of 6000.
///
/// Basic salary above the ceiling attracts no further contribution.
pub fn ordinary_wage_ceiling() -> Decimal {
    Decimal::new(6000, 0)
}

/// The result of the ordinary-wage contribution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrdinaryWageContribution {
    /// Basic salary after applying the ceiling.
    pub capped_wages: Decimal,
    /// Contribution on the capped wages at the bracket's total rate.
    pub contribution: Decimal,
}

/// Calculates the contribution on ordinary wages.
///
/// The wage base is `min(basic_salary, ordinary_wage_ceiling())`; the
/// contribution is that base multiplied by the bracket's total rate.
///
/// # Examples
///
/// ```
/// use cpf_engine::calculation::calculate_ordinary_wage_contribution;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_ordinary_wage_contribution(
///     Decimal::from_str("8000").unwrap(),
///     Decimal::from_str("0.37").unwrap(),
/// );
/// assert_eq!(result.capped_wages, Decimal::from_str("6000").unwrap());
/// assert_eq!(result.contribution, Decimal::from_str("2220").unwrap());
/// ```
pub fn calculate_ordinary_wage_contribution(
    basic_salary: Decimal,
    total_rate: Decimal,
) -> OrdinaryWageContribution {
    let capped_wages = basic_salary.min(ordinary_wage_ceiling());
    OrdinaryWageContribution {
        capped_wages,
        contribution: capped_wages * total_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// OW-001: salary below the ceiling is uncapped
    #[test]
    fn test_salary_below_ceiling_is_uncapped() {
        let result = calculate_ordinary_wage_contribution(dec("5000"), dec("0.37"));

        assert_eq!(result.capped_wages, dec("5000"));
        assert_eq!(result.contribution, dec("1850"));
    }

    /// OW-002: salary above the ceiling is capped at 6000
    #[test]
    fn test_salary_above_ceiling_is_capped() {
        let result = calculate_ordinary_wage_contribution(dec("8000"), dec("0.37"));

        assert_eq!(result.capped_wages, dec("6000"));
        assert_eq!(result.contribution, dec("2220"));
    }

    /// OW-003: salary exactly at the ceiling
    #[test]
    fn test_salary_at_ceiling_boundary() {
        let result = calculate_ordinary_wage_contribution(dec("6000"), dec("0.37"));

        assert_eq!(result.capped_wages, dec("6000"));
        assert_eq!(result.contribution, dec("2220"));
    }

    #[test]
    fn test_contribution_never_exceeds_ceiling_times_rate() {
        let rate = dec("0.37");
        let ceiling_contribution = ordinary_wage_ceiling() * rate;

        for salary in ["6000", "6000.01", "100000", "99999999"] {
            let result = calculate_ordinary_wage_contribution(dec(salary), rate);
            assert!(result.contribution <= ceiling_contribution, "{}", salary);
        }
    }

    #[test]
    fn test_zero_rate_yields_zero_contribution() {
        let result = calculate_ordinary_wage_contribution(dec("5000"), Decimal::ZERO);
        assert_eq!(result.contribution, Decimal::ZERO);
    }

    #[test]
    fn test_ceiling_is_exactly_6000() {
        assert_eq!(ordinary_wage_ceiling(), dec("6000"));
    }
}
