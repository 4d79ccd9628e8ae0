//! The in-memory contribution-rate table.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{EngineError, EngineResult};
use crate::models::{AgeGroup, CitizenshipStatus};

/// The contribution rates for one (citizenship, age group) bracket.
///
/// `total_rate` is always recomputed from the shares by [`RateEntry::new`];
/// the type deliberately has no `Deserialize` impl so the sum can never
/// drift from its components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateEntry {
    /// The fraction of wages contributed by the employee.
    pub employee_share: Decimal,
    /// The fraction of wages contributed by the employer.
    pub employer_share: Decimal,
    /// The combined rate, always `employee_share + employer_share`.
    pub total_rate: Decimal,
}

impl RateEntry {
    /// Builds an entry, deriving `total_rate` as the sum of the shares.
    pub fn new(employee_share: Decimal, employer_share: Decimal) -> Self {
        Self {
            employee_share,
            employer_share,
            total_rate: employee_share + employer_share,
        }
    }
}

/// The process-wide contribution-rate table.
///
/// Maps every (citizenship, age group) pair to exactly one [`RateEntry`]:
/// 10 entries, fully populated at all times. Lookups and updates may run
/// concurrently from independent request handlers; a lookup observes either
/// the entry before or after an update, never a torn one. Updates take
/// effect for subsequent lookups only; a calculation already past its
/// lookup is unaffected.
#[derive(Debug)]
pub struct RateTable {
    entries: RwLock<HashMap<(CitizenshipStatus, AgeGroup), RateEntry>>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl RateTable {
    /// Builds a table seeded with the statutory default rates: graduated
    /// declining citizen rates from 37% total below 55 down to 12.5% above
    /// 70, and zero for every foreigner bracket.
    pub fn with_defaults() -> Self {
        Self {
            entries: RwLock::new(default_entries()),
        }
    }

    /// Looks up the rate entry for a bracket.
    ///
    /// Every pair of valid enum values is present in a table built through
    /// the provided constructors, so the error arm is a defensive guard
    /// rather than a business case.
    pub fn get(
        &self,
        citizenship: CitizenshipStatus,
        age_group: AgeGroup,
    ) -> EngineResult<RateEntry> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&(citizenship, age_group))
            .copied()
            .ok_or(EngineError::RateNotFound {
                citizenship,
                age_group,
            })
    }

    /// Replaces the rate entry for a bracket.
    ///
    /// `total_rate` is recomputed as the sum of the shares. The caller is
    /// responsible for supplying shares already validated to lie in [0, 1].
    pub fn update(
        &self,
        citizenship: CitizenshipStatus,
        age_group: AgeGroup,
        employee_share: Decimal,
        employer_share: Decimal,
    ) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            (citizenship, age_group),
            RateEntry::new(employee_share, employer_share),
        );
    }
}

fn default_entries() -> HashMap<(CitizenshipStatus, AgeGroup), RateEntry> {
    let mut entries = HashMap::new();

    entries.insert(
        (CitizenshipStatus::Citizen, AgeGroup::Below55),
        RateEntry::new(Decimal::new(20, 2), Decimal::new(17, 2)),
    );
    entries.insert(
        (CitizenshipStatus::Citizen, AgeGroup::From55To60),
        RateEntry::new(Decimal::new(17, 2), Decimal::new(155, 3)),
    );
    entries.insert(
        (CitizenshipStatus::Citizen, AgeGroup::From60To65),
        RateEntry::new(Decimal::new(115, 3), Decimal::new(12, 2)),
    );
    entries.insert(
        (CitizenshipStatus::Citizen, AgeGroup::From65To70),
        RateEntry::new(Decimal::new(75, 3), Decimal::new(9, 2)),
    );
    entries.insert(
        (CitizenshipStatus::Citizen, AgeGroup::Above70),
        RateEntry::new(Decimal::new(5, 2), Decimal::new(75, 3)),
    );

    for age_group in AgeGroup::ALL {
        entries.insert(
            (CitizenshipStatus::Foreigner, age_group),
            RateEntry::new(Decimal::ZERO, Decimal::ZERO),
        );
    }

    entries
}
