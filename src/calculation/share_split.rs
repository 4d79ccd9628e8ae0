//! Employee/employer contribution split.

use rust_decimal::Decimal;

use crate::config::RateEntry;

/// The employee and employer portions of a total contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionSplit {
    /// The employee's portion.
    pub employee: Decimal,
    /// The employer's portion.
    pub employer: Decimal,
}

/// Splits a total contribution into employee and employer portions in
/// proportion to each party's share of the total rate.
///
/// A zero total rate (the default for every foreigner bracket) short-
/// circuits to zero portions; the proportional expression is never
/// evaluated with a zero divisor. Splitting the already-capped total,
/// rather than capping each party's wage base separately, guarantees
/// `employee + employer` equals the total by construction.
///
/// # Examples
///
/// ```
/// use cpf_engine::calculation::split_contribution;
/// use cpf_engine::config::RateEntry;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateEntry::new(
///     Decimal::from_str("0.2").unwrap(),
///     Decimal::from_str("0.17").unwrap(),
/// );
/// let split = split_contribution(Decimal::from_str("1850").unwrap(), &rates);
/// assert_eq!(split.employee, Decimal::from_str("1000").unwrap());
/// assert_eq!(split.employer, Decimal::from_str("850").unwrap());
/// ```
pub fn split_contribution(total_contribution: Decimal, rates: &RateEntry) -> ContributionSplit {
    if rates.total_rate.is_zero() {
        return ContributionSplit {
            employee: Decimal::ZERO,
            employer: Decimal::ZERO,
        };
    }

    // Multiply before dividing: the quotient terminates, so the division
    // stays exact.
    ContributionSplit {
        employee: total_contribution * rates.employee_share / rates.total_rate,
        employer: total_contribution * rates.employer_share / rates.total_rate,
    }
}
