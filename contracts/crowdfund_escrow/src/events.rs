//! # Events
//!
//! Append-only notifications consumed by off-chain indexers.
//!
//! Every event is published with the topic `(symbol, project_id)` and a
//! `#[contracttype]` struct as data:
//!
//! | Topic       | Data                   | Emitted by        |
//! |-------------|------------------------|-------------------|
//! | `created`   | [`ProjectCreated`]     | `create_project`  |
//! | `funded`    | [`ContributionReceived`] | `contribute`    |
//! | `cancelled` | [`ProjectCancelled`]   | `cancel_project`  |
//! | `failed`    | [`ProjectFailed`]      | `resolve_outcome` |
//! | `refunded`  | [`RefundIssued`]       | `refund`          |
//! | `withdrawn` | [`FundsWithdrawn`]     | `withdraw_funds`  |
//!
//! A successful resolution emits nothing; `status` alone reflects it.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub creator: Address,
    pub token: Address,
    pub funding_goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionReceived {
    pub project_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCancelled {
    pub project_id: u64,
    pub creator: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectFailed {
    pub project_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundIssued {
    pub project_id: u64,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub project_id: u64,
    pub creator: Address,
    pub amount: i128,
}

pub fn emit_project_created(
    env: &Env,
    project_id: u64,
    creator: Address,
    token: Address,
    funding_goal: i128,
    deadline: u64,
) {
    env.events().publish(
        (symbol_short!("created"), project_id),
        ProjectCreated {
            project_id,
            creator,
            token,
            funding_goal,
            deadline,
        },
    );
}

pub fn emit_contribution_received(env: &Env, project_id: u64, contributor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("funded"), project_id),
        ContributionReceived {
            project_id,
            contributor,
            amount,
        },
    );
}

pub fn emit_project_cancelled(env: &Env, project_id: u64, creator: Address) {
    env.events().publish(
        (symbol_short!("cancelled"), project_id),
        ProjectCancelled {
            project_id,
            creator,
        },
    );
}

pub fn emit_project_failed(env: &Env, project_id: u64) {
    env.events()
        .publish((symbol_short!("failed"), project_id), ProjectFailed { project_id });
}

pub fn emit_refund_issued(env: &Env, project_id: u64, contributor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("refunded"), project_id),
        RefundIssued {
            project_id,
            contributor,
            amount,
        },
    );
}

pub fn emit_funds_withdrawn(env: &Env, project_id: u64, creator: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"), project_id),
        FundsWithdrawn {
            project_id,
            creator,
            amount,
        },
    );
}
