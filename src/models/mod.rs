//! Core data models for the CPF contribution engine.
//!
//! This module contains all the domain models used throughout the engine.

mod contribution;
mod employee;
mod record;
mod salary;

pub use contribution::ContributionResult;
pub use employee::{AgeGroup, CitizenshipStatus};
pub use record::{CalculationRecord, NewCalculationRecord};
pub use salary::SalaryDetails;
