//! Crowdfund escrow event indexer — entry point.
//!
//! Starts a background indexer task that polls Soroban `getEvents` for the
//! escrow contract's events and persists them to SQLite, and serves them over
//! a small Axum REST API.

mod api;
mod config;
mod db;
mod errors;
mod events;
mod indexer;
mod rpc;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use indexer::IndexerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` is optional and must be read before the log filter.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("escrow_indexer=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let pool = db::init_pool(&config.database_url).await?;
    info!(
        contract = %config.contract_id,
        rpc = %config.rpc_url,
        "escrow indexer configured"
    );

    let rpc_client = Client::builder().timeout(Duration::from_secs(30)).build()?;
    tokio::spawn(indexer::run(Arc::new(IndexerState {
        pool: pool.clone(),
        config: config.clone(),
        client: rpc_client,
    })));

    let app = api::router(Arc::new(api::ApiState { pool }));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.api_port)).await?;
    info!("escrow API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
