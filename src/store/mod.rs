//! Persistence of calculation records.
//!
//! The [`RecordStore`] trait is the seam between the engine and whatever
//! medium holds the history; [`InMemoryRecordStore`] is the bundled
//! implementation. Records are append-only: the engine never updates or
//! deletes them.

mod memory;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{CalculationRecord, NewCalculationRecord};

pub use memory::InMemoryRecordStore;

/// Storage for calculation records.
///
/// Implementations must serialize concurrent appends safely; appends for
/// unrelated employees carry no ordering requirement between them.
pub trait RecordStore: Send + Sync {
    /// Appends a record, assigning its identifier and timestamp.
    ///
    /// Fails only when the underlying medium is unavailable or rejects
    /// the write.
    fn append(&self, record: NewCalculationRecord) -> EngineResult<CalculationRecord>;

    /// Returns an employee's records, newest first.
    ///
    /// Date bounds are inclusive and filter on the record's UTC calendar
    /// date. An employee with no records yields an empty vec; whether that
    /// constitutes an error is the boundary's decision. Ties on the
    /// timestamp preserve insertion order.
    fn history_for_employee(
        &self,
        employee_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> EngineResult<Vec<CalculationRecord>>;

    /// Returns every stored record, newest first.
    ///
    /// No pagination; callers scanning large histories pay for the full
    /// listing.
    fn all_records(&self) -> EngineResult<Vec<CalculationRecord>>;
}
