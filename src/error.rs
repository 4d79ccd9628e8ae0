//! Error types for the CPF contribution engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during contribution processing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{AgeGroup, CitizenshipStatus};

/// The main error type for the CPF contribution engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Variants fall into three families: validation failures (malformed or
/// out-of-range input, always recoverable at the boundary), configuration
/// failures (a rate lookup miss or an unreadable rates file), and storage
/// failures (the persistence medium rejecting a write).
///
/// # Example
///
/// ```
/// use cpf_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rates file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A salary field was missing, zero where a positive value is required,
    /// or negative.
    #[error("Invalid salary field '{field}': {message}")]
    InvalidSalary {
        /// The salary field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A contribution share was outside the [0, 1] range.
    #[error("Invalid share '{field}': {value} is outside the range [0, 1]")]
    InvalidShare {
        /// The share field that was invalid.
        field: String,
        /// The out-of-range value that was supplied.
        value: Decimal,
    },

    /// A history query supplied a start date later than its end date.
    #[error("Invalid date range: start date {start} is after end date {end}")]
    InvalidDateRange {
        /// The start of the requested range.
        start: NaiveDate,
        /// The end of the requested range.
        end: NaiveDate,
    },

    /// A bulk request was empty or exceeded the batch ceiling.
    #[error("Batch size {size} is outside the allowed range [1, {max}]")]
    BatchSizeOutOfRange {
        /// The number of records in the rejected batch.
        size: usize,
        /// The configured batch ceiling.
        max: usize,
    },

    /// No rate entry exists for the citizenship/age-group pair.
    ///
    /// The rate table is fully populated by construction, so hitting this
    /// indicates an internal invariant violation rather than bad input.
    #[error("No contribution rates configured for {citizenship}/{age_group}")]
    RateNotFound {
        /// The citizenship status that was looked up.
        citizenship: CitizenshipStatus,
        /// The age group that was looked up.
        age_group: AgeGroup,
    },

    /// Rates file was not found at the specified path.
    #[error("Rates file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rates file could not be parsed or contained invalid entries.
    #[error("Failed to parse rates file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The persistence medium was unavailable or rejected a write.
    #[error("Storage failure: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_invalid_salary_displays_field_and_message() {
        let error = EngineError::InvalidSalary {
            field: "basic_salary".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid salary field 'basic_salary': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_share_displays_field_and_value() {
        let error = EngineError::InvalidShare {
            field: "employee_share".to_string(),
            value: Decimal::from_str("1.5").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid share 'employee_share': 1.5 is outside the range [0, 1]"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_bounds() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: start date 2026-02-01 is after end date 2026-01-01"
        );
    }

    #[test]
    fn test_batch_size_out_of_range_displays_bounds() {
        let error = EngineError::BatchSizeOutOfRange {
            size: 1001,
            max: 1000,
        };
        assert_eq!(
            error.to_string(),
            "Batch size 1001 is outside the allowed range [1, 1000]"
        );
    }

    #[test]
    fn test_rate_not_found_displays_bracket() {
        let error = EngineError::RateNotFound {
            citizenship: CitizenshipStatus::Citizen,
            age_group: AgeGroup::Below55,
        };
        assert_eq!(
            error.to_string(),
            "No contribution rates configured for CITIZEN/BELOW_55"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse rates file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_storage_error_displays_message() {
        let error = EngineError::StorageError {
            message: "record collection unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Storage failure: record collection unavailable"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_storage_error() -> EngineResult<()> {
            Err(EngineError::StorageError {
                message: "down".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_storage_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
