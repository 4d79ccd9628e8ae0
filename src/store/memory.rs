//! In-memory record store.

use chrono::{NaiveDate, Utc};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

use super::RecordStore;
use crate::error::EngineResult;
use crate::models::{CalculationRecord, NewCalculationRecord};

/// A [`RecordStore`] backed by process memory.
///
/// Appends lock the collection for writing; queries take snapshots under
/// a read lock. Contents do not survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Vec<CalculationRecord>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn append(&self, record: NewCalculationRecord) -> EngineResult<CalculationRecord> {
        let stored = CalculationRecord {
            id: Uuid::new_v4(),
            employee_id: record.employee_id,
            citizenship: record.citizenship,
            age_group: record.age_group,
            salary_details: record.salary_details,
            contributions: record.contributions,
            calculated_at: Utc::now(),
        };

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.push(stored.clone());
        Ok(stored)
    }

    fn history_for_employee(
        &self,
        employee_id: &str,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> EngineResult<Vec<CalculationRecord>> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);

        let mut matches: Vec<CalculationRecord> = records
            .iter()
            .filter(|record| record.employee_id == employee_id)
            .filter(|record| {
                let date = record.calculated_at.date_naive();
                start_date.is_none_or(|start| date >= start)
                    && end_date.is_none_or(|end| date <= end)
            })
            .cloned()
            .collect();

        // Stable sort: ties on the timestamp keep insertion order.
        matches.sort_by(|a, b| b.calculated_at.cmp(&a.calculated_at));
        Ok(matches)
    }

    fn all_records(&self) -> EngineResult<Vec<CalculationRecord>> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);

        let mut all: Vec<CalculationRecord> = records.clone();
        all.sort_by(|a, b| b.calculated_at.cmp(&a.calculated_at));
        Ok(all)
    }
}
