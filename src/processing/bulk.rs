//! Bulk batch processing.
//!
//! Fans a batch of calculation inputs out across tokio tasks, one per
//! record, and partitions the tagged outcomes. A failing record becomes an
//! entry in the failures list; it never aborts or rolls back the rest of
//! the batch.

use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::warn;

use super::single::{CalculationInput, calculate_and_record};
use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::CalculationRecord;
use crate::store::RecordStore;

/// The default ceiling on bulk batch size.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 1000;

/// One record that failed during bulk processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkFailure {
    /// The employee whose record failed.
    pub employee_id: String,
    /// Why the record failed.
    pub reason: String,
}

/// Aggregate counts for a processed batch.
///
/// `successful_count + failed_count` always equals `total_processed`,
/// which always equals the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulkSummary {
    /// The number of records in the batch.
    pub total_processed: usize,
    /// The number of records calculated and stored.
    pub successful_count: usize,
    /// The number of records that failed.
    pub failed_count: usize,
}

/// The outcome of a processed batch.
#[derive(Debug, Clone, Serialize)]
pub struct BulkOutcome {
    /// Aggregate counts.
    pub summary: BulkSummary,
    /// The stored records, in completion order.
    pub successes: Vec<CalculationRecord>,
    /// The failed records, in completion order.
    pub failures: Vec<BulkFailure>,
}

/// Processes a batch of calculation inputs concurrently.
///
/// The batch size must lie in `[1, max_batch_size]`; an out-of-bounds
/// batch is rejected as a whole before any record is touched. Each record
/// then runs independently, validating, calculating, and persisting in
/// that strict order, with any failure captured as a [`BulkFailure`]. No
/// ordering is guaranteed between records of the same batch.
pub async fn process_batch(
    rates: Arc<RateTable>,
    store: Arc<dyn RecordStore>,
    inputs: Vec<CalculationInput>,
    max_batch_size: usize,
) -> EngineResult<BulkOutcome> {
    let total_processed = inputs.len();
    if total_processed == 0 || total_processed > max_batch_size {
        return Err(EngineError::BatchSizeOutOfRange {
            size: total_processed,
            max: max_batch_size,
        });
    }

    let mut tasks = JoinSet::new();
    for input in inputs {
        let rates = Arc::clone(&rates);
        let store = Arc::clone(&store);
        tasks.spawn(async move {
            calculate_and_record(&rates, store.as_ref(), &input).map_err(|err| BulkFailure {
                employee_id: input.employee_id,
                reason: err.to_string(),
            })
        });
    }

    let mut successes = Vec::new();
    let mut failures = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(record)) => successes.push(record),
            Ok(Err(failure)) => failures.push(failure),
            Err(err) => {
                // A task that died still counts against the batch total.
                warn!(error = %err, "bulk calculation task did not complete");
                failures.push(BulkFailure {
                    employee_id: String::new(),
                    reason: format!("calculation task did not complete: {err}"),
                });
            }
        }
    }

    Ok(BulkOutcome {
        summary: BulkSummary {
            total_processed,
            successful_count: successes.len(),
            failed_count: failures.len(),
        },
        successes,
        failures,
    })
}
