//! Rate override loading from YAML files.
//!
//! A rates file lets deployments boot with non-default contribution rates.
//! Entries are applied on top of the statutory defaults, so a file may
//! override a single bracket or all ten.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::rate_table::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AgeGroup, CitizenshipStatus};

/// Rates file structure.
#[derive(Debug, Deserialize)]
struct RatesFile {
    rates: Vec<RateOverride>,
}

/// One bracket override in a rates file.
#[derive(Debug, Deserialize)]
struct RateOverride {
    citizenship: CitizenshipStatus,
    age_group: AgeGroup,
    employee_share: Decimal,
    employer_share: Decimal,
}

impl RateTable {
    /// Builds a table from the statutory defaults with the file's entries
    /// applied on top.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it contains invalid YAML or a share outside
    /// the [0, 1] range.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cpf_engine::config::RateTable;
    ///
    /// let rates = RateTable::from_file("./config/rates.yaml")?;
    /// # Ok::<(), cpf_engine::error::EngineError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();

        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: label.clone(),
        })?;
        let overrides = parse_rates(&contents, &label)?;

        let table = RateTable::with_defaults();
        for entry in overrides {
            table.update(
                entry.citizenship,
                entry.age_group,
                entry.employee_share,
                entry.employer_share,
            );
        }
        Ok(table)
    }
}

fn parse_rates(contents: &str, path: &str) -> EngineResult<Vec<RateOverride>> {
    let file: RatesFile =
        serde_yaml::from_str(contents).map_err(|err| EngineError::ConfigParseError {
            path: path.to_string(),
            message: err.to_string(),
        })?;

    for entry in &file.rates {
        for (field, value) in [
            ("employee_share", entry.employee_share),
            ("employer_share", entry.employer_share),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!(
                        "{} {} for {}/{} is outside the range [0, 1]",
                        field, value, entry.citizenship, entry.age_group
                    ),
                });
            }
        }
    }

    Ok(file.rates)
}
