//! Indexer configuration loaded from environment variables.
//!
//! | Variable             | Default                                  |
//! |----------------------|------------------------------------------|
//! | `RPC_URL`            | `https://soroban-testnet.stellar.org`    |
//! | `CONTRACT_ID`        | required                                 |
//! | `DATABASE_URL`       | `sqlite:./escrow_events.db`              |
//! | `API_PORT`           | `3001`                                   |
//! | `POLL_INTERVAL_SECS` | `5`                                      |
//! | `EVENTS_PER_PAGE`    | `100`                                    |
//! | `START_LEDGER`       | `0`                                      |

use std::str::FromStr;

use crate::errors::{IndexerError, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Soroban RPC endpoint.
    pub rpc_url: String,
    /// Escrow contract address (Strkey format).
    pub contract_id: String,
    pub database_url: String,
    pub api_port: u16,
    /// Delay between two `getEvents` polls.
    pub poll_interval_secs: u64,
    pub events_per_page: u32,
    /// Ledger to start from if no cursor is saved.
    pub start_ledger: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contract_id = lookup("CONTRACT_ID")
            .filter(|v| !v.trim().is_empty())
            .ok_or(IndexerError::MissingSetting("CONTRACT_ID"))?;

        Ok(Config {
            rpc_url: lookup("RPC_URL")
                .unwrap_or_else(|| "https://soroban-testnet.stellar.org".to_string()),
            contract_id,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:./escrow_events.db".to_string()),
            api_port: parse_or(&lookup, "API_PORT", 3001)?,
            poll_interval_secs: parse_or(&lookup, "POLL_INTERVAL_SECS", 5)?,
            events_per_page: parse_or(&lookup, "EVENTS_PER_PAGE", 100)?,
            start_ledger: parse_or(&lookup, "START_LEDGER", 0)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| IndexerError::InvalidSetting {
                key: key.to_string(),
                value: raw.clone(),
            }),
    }
}
