//! Background task that polls the Soroban RPC and writes decoded escrow
//! events to the database.
//!
//! The indexer never calls into the contract. Bots that decide when to submit
//! `resolve_outcome` or `refund` read what it stores.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::db;
use crate::errors::Result;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Position in the event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Position {
    ledger: u32,
    cursor: Option<String>,
}

/// Run the indexer loop forever; spawn it as a background [`tokio`] task.
pub async fn run(state: Arc<IndexerState>) {
    info!("Indexer starting — contract: {}", state.config.contract_id);

    let mut position = match db::load_cursor(&state.pool).await {
        Ok((ledger, cursor)) if ledger > 0 => Position {
            ledger: ledger as u32,
            cursor,
        },
        Ok(_) => Position {
            ledger: state.config.start_ledger,
            cursor: None,
        },
        Err(e) => {
            error!("Could not load cursor, starting from configured ledger: {e}");
            Position {
                ledger: state.config.start_ledger,
                cursor: None,
            }
        }
    };

    info!("Resuming from ledger {}", position.ledger);

    loop {
        match poll_once(&state, &position).await {
            Ok(next) => position = next,
            Err(e) if e.is_transient() => warn!("Indexer poll failed, retrying: {e}"),
            Err(e) => error!("Indexer poll error needs attention: {e}"),
        }

        tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)).await;
    }
}

/// Fetch, decode, and store one page; persist and return the next position.
async fn poll_once(state: &IndexerState, position: &Position) -> Result<Position> {
    let config = &state.config;
    let page = rpc::fetch_events(
        &state.client,
        &config.rpc_url,
        &config.contract_id,
        position.ledger,
        position.cursor.as_deref(),
        config.events_per_page,
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events, &config.contract_id);
        let inserted = db::insert_events(&state.pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            page.events.len(),
            inserted
        );
    }

    let next = advance(position, page.cursor, page.latest_ledger);
    db::save_cursor(&state.pool, next.ledger as i64, next.cursor.as_deref()).await?;
    Ok(next)
}

/// The start ledger never moves backwards; the cursor, when present, drives
/// pagination on the next call.
fn advance(position: &Position, cursor: Option<String>, latest_ledger: Option<u64>) -> Position {
    let ledger = latest_ledger
        .map(|l| (l.min(u32::MAX as u64) as u32).max(position.ledger))
        .unwrap_or(position.ledger);
    Position { ledger, cursor }
}
