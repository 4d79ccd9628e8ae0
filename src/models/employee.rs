//! Employee attribute enumerations.
//!
//! This module defines the citizenship status and age group enums that
//! together form the rate bracket for a contribution calculation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The citizenship status of an employee.
///
/// Citizenship selects which half of the rate table applies; foreigner
/// brackets default to zero rates until an operator configures them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CitizenshipStatus {
    /// A citizen subject to the graduated statutory rates.
    Citizen,
    /// A foreign employee.
    Foreigner,
}

impl CitizenshipStatus {
    /// All citizenship statuses, in declaration order.
    pub const ALL: [CitizenshipStatus; 2] =
        [CitizenshipStatus::Citizen, CitizenshipStatus::Foreigner];
}

impl fmt::Display for CitizenshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitizenshipStatus::Citizen => write!(f, "CITIZEN"),
            CitizenshipStatus::Foreigner => write!(f, "FOREIGNER"),
        }
    }
}

/// The statutory age bracket of an employee.
///
/// Brackets are contiguous, non-overlapping, and exhaustive. Assigning an
/// employee to a bracket is the caller's concern; the engine never derives
/// the bracket from an age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Employees below 55 years of age.
    #[serde(rename = "BELOW_55")]
    Below55,
    /// Employees from 55 up to 60 years of age.
    #[serde(rename = "55_TO_60")]
    From55To60,
    /// Employees from 60 up to 65 years of age.
    #[serde(rename = "60_TO_65")]
    From60To65,
    /// Employees from 65 up to 70 years of age.
    #[serde(rename = "65_TO_70")]
    From65To70,
    /// Employees above 70 years of age.
    #[serde(rename = "ABOVE_70")]
    Above70,
}

impl AgeGroup {
    /// All age groups, youngest bracket first.
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Below55,
        AgeGroup::From55To60,
        AgeGroup::From60To65,
        AgeGroup::From65To70,
        AgeGroup::Above70,
    ];
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeGroup::Below55 => write!(f, "BELOW_55"),
            AgeGroup::From55To60 => write!(f, "55_TO_60"),
            AgeGroup::From60To65 => write!(f, "60_TO_65"),
            AgeGroup::From65To70 => write!(f, "65_TO_70"),
            AgeGroup::Above70 => write!(f, "ABOVE_70"),
        }
    }
}
