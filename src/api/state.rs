//! Application state for the CPF contribution engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateTable;
use crate::store::RecordStore;

/// Shared application state.
///
/// Holds the two resources the handlers share: the mutable rate table and
/// the record store. Both live behind `Arc`, so cloning the state for each
/// request is cheap and every handler sees the same table and history.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<RateTable>,
    store: Arc<dyn RecordStore>,
}

impl AppState {
    /// Creates application state from a rate table and a record store.
    pub fn new(rates: RateTable, store: impl RecordStore + 'static) -> Self {
        Self {
            rates: Arc::new(rates),
            store: Arc::new(store),
        }
    }

    /// Returns a reference to the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    /// Returns a shared handle to the rate table for fan-out work.
    pub fn rates_handle(&self) -> Arc<RateTable> {
        Arc::clone(&self.rates)
    }

    /// Returns a shared handle to the record store for fan-out work.
    pub fn store_handle(&self) -> Arc<dyn RecordStore> {
        Arc::clone(&self.store)
    }
}
