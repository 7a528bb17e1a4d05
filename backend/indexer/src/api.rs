//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::db;
use crate::errors::IndexerError;
use crate::events::{EventKind, EventRecord};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

/// Read-only routes over the indexed escrow events.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/events", get(get_all_events))
        .route("/projects/:id/events", get(get_project_events))
        .route("/projects/:id/refunds", get(get_project_refunds))
        .route("/projects/:id/withdrawal", get(get_project_withdrawal))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EventsResponse {
    pub project_id: String,
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct AllEventsResponse {
    pub count: usize,
    pub events: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct RefundsResponse {
    pub project_id: String,
    pub count: usize,
    /// Sum of all refunded amounts, as a decimal string (amounts are i128 on-chain).
    pub total_refunded: String,
    pub refunds: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct WithdrawalResponse {
    pub project_id: String,
    pub withdrawn: bool,
    /// Amount released to the creator, as a decimal string; `"0"` until withdrawn.
    pub amount: String,
    pub event: Option<EventRecord>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(e: IndexerError) -> Response {
    error!("API query failed: {e}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /projects/:id/events`
pub async fn get_project_events(
    State(state): State<Arc<ApiState>>,
    Path(project_id): Path<String>,
) -> Response {
    match db::get_events_for_project(&state.pool, &project_id).await {
        Ok(events) => Json(EventsResponse {
            project_id,
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /projects/:id/refunds`
///
/// Refunds paid out for a failed project, with their total.
pub async fn get_project_refunds(
    State(state): State<Arc<ApiState>>,
    Path(project_id): Path<String>,
) -> Response {
    match db::get_project_events_of_kind(&state.pool, &project_id, EventKind::RefundIssued).await
    {
        Ok(refunds) => Json(RefundsResponse {
            project_id,
            count: refunds.len(),
            total_refunded: sum_amounts(&refunds).to_string(),
            refunds,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// `GET /projects/:id/withdrawal`
///
/// Whether the creator of a completed project has taken its escrow.
pub async fn get_project_withdrawal(
    State(state): State<Arc<ApiState>>,
    Path(project_id): Path<String>,
) -> Response {
    match db::get_project_events_of_kind(&state.pool, &project_id, EventKind::FundsWithdrawn)
        .await
    {
        Ok(mut events) => {
            let event = events.pop();
            Json(WithdrawalResponse {
                project_id,
                withdrawn: event.is_some(),
                amount: sum_amounts(event.as_slice()).to_string(),
                event,
            })
            .into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// `GET /events`
pub async fn get_all_events(State(state): State<Arc<ApiState>>) -> Response {
    match db::get_all_events(&state.pool).await {
        Ok(events) => Json(AllEventsResponse {
            count: events.len(),
            events,
        })
        .into_response(),
        Err(e) => internal_error(e),
    }
}

/// Amounts that fail to parse are counted as zero.
fn sum_amounts(records: &[EventRecord]) -> i128 {
    records
        .iter()
        .filter_map(|r| r.amount.as_deref())
        .filter_map(|a| a.parse::<i128>().ok())
        .sum()
}
