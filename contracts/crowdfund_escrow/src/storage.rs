//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers. Every read and write the
//! contract performs goes through this module; entry points never touch
//! `env.storage()` directly.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type      | Description                        |
//! |------------------|-----------|------------------------------------|
//! | `ProjectCount`   | `u64`     | Auto-increment project ID counter  |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                            | Type            | Description                           |
//! |--------------------------------|-----------------|---------------------------------------|
//! | `ProjConfig(id)`               | `ProjectConfig` | Immutable project configuration       |
//! | `ProjState(id)`                | `ProjectState`  | Mutable project state                 |
//! | `Contribution(id, addr)`       | `i128`          | Cumulative amount contributed         |
//! | `RefundProcessed(id, addr)`    | `bool`          | Presence flag: refund paid out        |
//! | `FailureProcessed(id)`         | `bool`          | Presence flag: outcome resolved       |
//! | `FundsWithdrawn(id)`           | `bool`          | Presence flag: creator paid out       |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! The flags are presence-only: they are written once and never removed,
//! so `has` is the only query that matters.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Project, ProjectConfig, ProjectState};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys, one variant per namespace.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for project IDs (Instance).
    ProjectCount,
    /// Immutable project configuration keyed by ID (Persistent).
    ProjConfig(u64),
    /// Mutable project state keyed by ID (Persistent).
    ProjState(u64),
    /// Cumulative contribution of one address to one project (Persistent).
    Contribution(u64, Address),
    /// Set once the contributor has been refunded (Persistent).
    RefundProcessed(u64, Address),
    /// Set once the resolver has committed a terminal outcome (Persistent).
    FailureProcessed(u64),
    /// Set once the creator has withdrawn a completed project's escrow (Persistent).
    FundsWithdrawn(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Reads, increments, and stores the project counter.
/// Returns the ID to use for the *current* project (pre-increment value).
pub fn get_and_increment_project_id(env: &Env) -> Result<u64, Error> {
    bump_instance(env);
    let current = project_count(env);
    let next = current.checked_add(1).ok_or(Error::Overflow)?;
    env.storage().instance().set(&DataKey::ProjectCount, &next);
    Ok(current)
}

/// Number of projects created so far.
pub fn project_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Save both the immutable config and initial mutable state for a new project.
pub fn save_project(env: &Env, project: &Project) {
    let (config, state) = project.clone().into_parts();
    let config_key = DataKey::ProjConfig(config.id);

    env.storage().persistent().set(&config_key, &config);
    bump_persistent(env, &config_key);
    save_project_state(env, config.id, &state);
}

/// Load the full `Project` by combining config and state.
pub fn load_project(env: &Env, id: u64) -> Result<Project, Error> {
    let (config, state) = load_project_pair(env, id)?;
    Ok(Project::from_parts(config, state))
}

/// Load config and state together; the common read path of every operation.
pub fn load_project_pair(env: &Env, id: u64) -> Result<(ProjectConfig, ProjectState), Error> {
    Ok((load_project_config(env, id)?, load_project_state(env, id)?))
}

/// Load only the immutable project configuration.
pub fn load_project_config(env: &Env, id: u64) -> Result<ProjectConfig, Error> {
    let key = DataKey::ProjConfig(id);
    let config: ProjectConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

/// Load only the mutable project state.
pub fn load_project_state(env: &Env, id: u64) -> Result<ProjectState, Error> {
    let key = DataKey::ProjState(id);
    let state: ProjectState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Save only the mutable project state.
pub fn save_project_state(env: &Env, id: u64, state: &ProjectState) {
    let key = DataKey::ProjState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ── Contributions ────────────────────────────────────────────────────

/// Recorded contribution of `contributor` to `project_id`; zero when absent.
pub fn get_contribution(env: &Env, project_id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Contribution(project_id, contributor.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_contribution(env: &Env, project_id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(project_id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ── Idempotency flags ────────────────────────────────────────────────

pub fn is_refund_processed(env: &Env, project_id: u64, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::RefundProcessed(project_id, contributor.clone()))
}

pub fn mark_refund_processed(env: &Env, project_id: u64, contributor: &Address) {
    let key = DataKey::RefundProcessed(project_id, contributor.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn is_failure_processed(env: &Env, project_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::FailureProcessed(project_id))
}

pub fn mark_failure_processed(env: &Env, project_id: u64) {
    let key = DataKey::FailureProcessed(project_id);
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}

pub fn is_funds_withdrawn(env: &Env, project_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::FundsWithdrawn(project_id))
}

pub fn mark_funds_withdrawn(env: &Env, project_id: u64) {
    let key = DataKey::FundsWithdrawn(project_id);
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
