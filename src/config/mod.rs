//! Contribution-rate configuration for the CPF engine.
//!
//! This module provides the in-memory rate table keyed by citizenship and
//! age group, pre-seeded with the statutory defaults, plus optional loading
//! of rate overrides from a YAML file.
//!
//! # Example
//!
//! ```
//! use cpf_engine::config::RateTable;
//! use cpf_engine::models::{AgeGroup, CitizenshipStatus};
//!
//! let rates = RateTable::with_defaults();
//! let entry = rates
//!     .get(CitizenshipStatus::Citizen, AgeGroup::Below55)
//!     .unwrap();
//! assert_eq!(entry.total_rate.to_string(), "0.37");
//! ```

mod loader;
mod rate_table;

pub use rate_table::{RateEntry, RateTable};
