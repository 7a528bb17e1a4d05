//! Failure modes of the escrow indexer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("event store: {0}")]
    Store(#[from] sqlx::Error),

    #[error("event store migration: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("RPC transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed RPC payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("missing setting {0}")]
    MissingSetting(&'static str),

    #[error("invalid setting {key}: {value:?}")]
    InvalidSetting { key: String, value: String },

    #[error("RPC rejected getEvents ({code}): {message}")]
    Rpc { code: i64, message: String },

    #[error("getEvents returned neither a result nor an error")]
    EmptyPage,
}

impl IndexerError {
    /// Whether the next poll may succeed without operator action.
    ///
    /// Settings, migrations and hard RPC rejections repeat on every poll.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Store(_) | Self::Transport(_) | Self::Payload(_) | Self::EmptyPage
        )
    }
}

pub type Result<T> = std::result::Result<T, IndexerError>;
