//! Calculation orchestration for the CPF contribution engine.
//!
//! This module wires the pure calculator to the rate table and the record
//! store: a single-record path (pure query plus a persist-on-top wrapper)
//! and the bulk processor that fans the single path out across a batch
//! with per-record failure isolation.

mod bulk;
mod single;

pub use bulk::{
    BulkFailure, BulkOutcome, BulkSummary, DEFAULT_MAX_BATCH_SIZE, process_batch,
};
pub use single::{CalculationInput, calculate_and_record, calculate_for_employee};
