//! Server binary for the CPF contribution engine.
//!
//! Boots the rate table (statutory defaults, or a YAML override file named
//! by `CPF_RATES_FILE`), wires up the in-memory record store, and serves
//! the API on `PORT` (default 8000).

use std::net::SocketAddr;

use tracing::info;

use cpf_engine::api::{AppState, create_router};
use cpf_engine::config::RateTable;
use cpf_engine::store::InMemoryRecordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rates = match std::env::var("CPF_RATES_FILE") {
        Ok(path) => {
            info!(path = %path, "Loading contribution rates from file");
            RateTable::from_file(&path)?
        }
        Err(_) => RateTable::with_defaults(),
    };

    let state = AppState::new(rates, InMemoryRecordStore::new());
    let router = create_router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "CPF contribution engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
