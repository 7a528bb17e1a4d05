//! Canonical event types emitted by the crowdfund escrow contract.
//!
//! These mirror `contracts/crowdfund_escrow/src/events.rs`: every contract
//! event carries the topic `(symbol, project_id)`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the escrow contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A project was created (`created` topic).
    ProjectCreated,
    /// A contribution reached escrow (`funded` topic).
    ContributionReceived,
    /// An empty project was withdrawn by its creator (`cancelled` topic).
    ProjectCancelled,
    /// The resolver marked a project as failed (`failed` topic).
    ProjectFailed,
    /// A contributor of a failed project was paid back (`refunded` topic).
    RefundIssued,
    /// The creator took the escrow of a completed project (`withdrawn` topic).
    FundsWithdrawn,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "created" => Self::ProjectCreated,
            "funded" => Self::ContributionReceived,
            "cancelled" => Self::ProjectCancelled,
            "failed" => Self::ProjectFailed,
            "refunded" => Self::RefundIssued,
            "withdrawn" => Self::FundsWithdrawn,
            _ => Self::Unknown,
        }
    }

    /// Identifier stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectCreated => "project_created",
            Self::ContributionReceived => "contribution_received",
            Self::ProjectCancelled => "project_cancelled",
            Self::ProjectFailed => "project_failed",
            Self::RefundIssued => "refund_issued",
            Self::FundsWithdrawn => "funds_withdrawn",
            Self::Unknown => "unknown",
        }
    }
}

/// A decoded escrow event, ready to be stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscrowEvent {
    /// RPC-assigned event id; the idempotency key of the `events` table.
    pub event_id: String,
    pub event_type: String,
    pub project_id: Option<String>,
    /// Creator or contributor depending on the kind.
    pub actor: Option<String>,
    /// Goal for `created`, transferred amount for `funded`/`refunded`/`withdrawn`.
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A row of the `events` table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub project_id: Option<String>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
