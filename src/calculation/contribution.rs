//! The composing contribution calculation.

use rust_decimal::Decimal;

use super::{calculate_additional_wage_contribution, calculate_ordinary_wage_contribution};
use super::{ContributionSplit, split_contribution};
use crate::config::RateEntry;
use crate::models::{ContributionResult, SalaryDetails};

/// Calculates the full contribution breakdown for one employee.
///
/// This is a pure function of the rate entry and the salary inputs; input
/// validation is the boundary's responsibility and rate lookup is the
/// caller's. The steps:
///
/// 1. Contribution on ordinary wages, capped at the monthly ceiling.
/// 2. Contribution on bonus + additional wages, capped at the
///    additional-wage ceiling.
/// 3. The combined total, split between employee and employer in
///    proportion to their shares of the total rate.
/// 4. Gross salary from the raw (uncapped) inputs; net salary after the
///    employee contribution.
///
/// # Examples
///
/// ```
/// use cpf_engine::calculation::calculate_contribution;
/// use cpf_engine::config::RateEntry;
/// use cpf_engine::models::SalaryDetails;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateEntry::new(
///     Decimal::from_str("0.2").unwrap(),
///     Decimal::from_str("0.17").unwrap(),
/// );
/// let salary = SalaryDetails {
///     basic_salary: Decimal::from_str("5000").unwrap(),
///     bonus: Decimal::ZERO,
///     additional_wages: Decimal::ZERO,
/// };
///
/// let result = calculate_contribution(&rates, &salary);
/// assert_eq!(result.total_contribution, Decimal::from_str("1850").unwrap());
/// assert_eq!(result.net_salary, Decimal::from_str("4000").unwrap());
/// ```
pub fn calculate_contribution(rates: &RateEntry, salary: &SalaryDetails) -> ContributionResult {
    let ordinary = calculate_ordinary_wage_contribution(salary.basic_salary, rates.total_rate);
    let additional = calculate_additional_wage_contribution(
        salary.bonus,
        salary.additional_wages,
        rates.total_rate,
    );

    let total_contribution = ordinary.contribution + additional.contribution;
    let ContributionSplit { employee, employer } = split_contribution(total_contribution, rates);

    let gross_salary = salary.gross();

    ContributionResult {
        employee_contribution: employee,
        employer_contribution: employer,
        total_contribution,
        gross_salary,
        net_salary: gross_salary - employee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn salary(basic: &str, bonus: &str, additional: &str) -> SalaryDetails {
        SalaryDetails {
            basic_salary: dec(basic),
            bonus: dec(bonus),
            additional_wages: dec(additional),
        }
    }

    fn citizen_below_55_rates() -> RateEntry {
        RateEntry::new(dec("0.2"), dec("0.17"))
    }

    /// CC-001: citizen below 55 on 5000 basic
    #[test]
    fn test_citizen_below_55_basic_5000() {
        let result = calculate_contribution(&citizen_below_55_rates(), &salary("5000", "0", "0"));

        assert_eq!(result.total_contribution, dec("1850"));
        assert_eq!(result.employee_contribution, dec("1000"));
        assert_eq!(result.employer_contribution, dec("850"));
        assert_eq!(result.gross_salary, dec("5000"));
        assert_eq!(result.net_salary, dec("4000"));
    }

    /// CC-002: basic salary above the ordinary ceiling is capped
    #[test]
    fn test_citizen_below_55_basic_8000_capped() {
        let result = calculate_contribution(&citizen_below_55_rates(), &salary("8000", "0", "0"));

        assert_eq!(result.total_contribution, dec("2220"));
        assert_eq!(result.employee_contribution, dec("1200"));
        assert_eq!(result.employer_contribution, dec("1020"));
        assert_eq!(result.gross_salary, dec("8000"));
        assert_eq!(result.net_salary, dec("6800"));
    }

    /// CC-003: zero-rate bracket contributes nothing regardless of salary
    #[test]
    fn test_zero_rate_bracket_contributes_nothing() {
        let rates = RateEntry::new(Decimal::ZERO, Decimal::ZERO);
        let result = calculate_contribution(&rates, &salary("5000", "100000", "50000"));

        assert_eq!(result.employee_contribution, Decimal::ZERO);
        assert_eq!(result.employer_contribution, Decimal::ZERO);
        assert_eq!(result.total_contribution, Decimal::ZERO);
        assert_eq!(result.net_salary, result.gross_salary);
    }

    #[test]
    fn test_bonus_and_additional_wages_use_additional_cap() {
        // 5000 ordinary + (2000 + 1000) additional, no cap reached.
        let result =
            calculate_contribution(&citizen_below_55_rates(), &salary("5000", "2000", "1000"));

        // 5000 * 0.37 + 3000 * 0.37
        assert_eq!(result.total_contribution, dec("2960"));
        assert_eq!(result.gross_salary, dec("8000"));
    }

    #[test]
    fn test_both_caps_apply_independently() {
        let result =
            calculate_contribution(&citizen_below_55_rates(), &salary("10000", "200000", "0"));

        // Ordinary capped at 6000, additional capped at 102000.
        let expected_total = (dec("6000") + dec("102000")) * dec("0.37");
        assert_eq!(result.total_contribution, expected_total);
        // Gross uses the raw, uncapped inputs.
        assert_eq!(result.gross_salary, dec("210000"));
    }

    #[test]
    fn test_shares_sum_to_total_across_brackets() {
        let brackets = [
            ("0.2", "0.17"),
            ("0.17", "0.155"),
            ("0.115", "0.12"),
            ("0.075", "0.09"),
            ("0.05", "0.075"),
        ];

        for (employee_share, employer_share) in brackets {
            let rates = RateEntry::new(dec(employee_share), dec(employer_share));
            let result = calculate_contribution(&rates, &salary("4321.55", "1234.67", "88.12"));

            assert_eq!(
                result.employee_contribution + result.employer_contribution,
                result.total_contribution,
                "shares must sum to the total for {}/{}",
                employee_share,
                employer_share
            );
        }
    }

    #[test]
    fn test_net_plus_employee_contribution_equals_gross() {
        let result =
            calculate_contribution(&citizen_below_55_rates(), &salary("5500", "800", "200"));

        assert_eq!(
            result.net_salary + result.employee_contribution,
            result.gross_salary
        );
    }
}
