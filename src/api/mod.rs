//! HTTP API module for the CPF contribution engine.
//!
//! This module provides the REST endpoints for calculating contributions,
//! bulk processing, querying calculation history, and updating the
//! contribution-rate table.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BulkCalculationRequest, CalculationRequest, RateUpdateRequest};
pub use response::ApiError;
pub use state::AppState;
