//! # Crowdfund Escrow Contract
//!
//! A single Soroban contract, `CrowdfundEscrow`, that holds contributions to
//! a project in escrow until its deadline, then either marks the project
//! successful or lets every contributor pull their money back.
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Creation     | [`CrowdfundEscrow::create_project`], `cancel_project` |
//! | Funding      | [`CrowdfundEscrow::contribute`]                  |
//! | Resolution   | [`CrowdfundEscrow::resolve_outcome`]             |
//! | Refunds      | [`CrowdfundEscrow::refund`]                      |
//! | Payout       | [`CrowdfundEscrow::withdraw_funds`]              |
//! | Queries      | `get_project`, `get_contribution`, `is_refunded`, `is_failure_processed`, `is_withdrawn`, `project_count` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`]. Intake lives in
//! [`intake`], resolution in [`lifecycle`], payouts in [`refund`] and
//! [`withdraw`]. This file contains **only** the public entry points and
//! authorization checks.
//!
//! `resolve_outcome` and `refund` are permissionless: any address may submit
//! them, and they never call `require_auth`. Their safety comes from the
//! deadline comparison and the two idempotency flags, checked before any
//! write. A failing check returns an [`Error`] and the invocation leaves no
//! trace on the ledger.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

pub mod events;
mod intake;
mod lifecycle;
mod refund;
mod storage;
mod types;
pub mod validation;
mod withdraw;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::{Project, ProjectStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The referenced project does not exist.
    NotFound = 1,
    /// A precondition on timing, re-processing, or refundable value failed.
    InvalidInput = 2,
    /// The project's lifecycle state does not allow this transition.
    InvalidProjectStatus = 3,
    /// The project is not in the status the operation requires.
    ProjectNotActive = 4,
    /// Contributions are closed once the deadline has passed.
    DeadlinePassed = 5,
    /// A counter or running total would exceed its integer range.
    Overflow = 6,
    /// Only projects that never received funds can be cancelled.
    ProjectHasContributions = 7,
}

#[contract]
pub struct CrowdfundEscrow;

#[contractimpl]
impl CrowdfundEscrow {
    // ─────────────────────────────────────────────────────────
    // Intake
    // ─────────────────────────────────────────────────────────

    /// Create a new project accepting contributions in `token` until `deadline`.
    ///
    /// - `creator` must sign the transaction.
    /// - `funding_goal` must be at least [`validation::MIN_FUNDING_GOAL`].
    /// - `deadline` must lie between [`validation::MIN_PROJECT_DURATION`] and
    ///   [`validation::MAX_PROJECT_DURATION`] from now.
    pub fn create_project(
        env: Env,
        creator: Address,
        token: Address,
        funding_goal: i128,
        deadline: u64,
    ) -> Result<Project, Error> {
        creator.require_auth();
        intake::create_project(&env, creator, token, funding_goal, deadline)
    }

    /// Contribute `amount` of the project's token.
    ///
    /// Rejected once the project left `Active` or the deadline has passed.
    pub fn contribute(
        env: Env,
        project_id: u64,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();
        intake::contribute(&env, project_id, contributor, amount)
    }

    /// Cancel an `Active` project that has not received any contribution.
    ///
    /// The project's creator must sign the transaction.
    pub fn cancel_project(env: Env, project_id: u64) -> Result<(), Error> {
        intake::cancel_project(&env, project_id)
    }

    // ─────────────────────────────────────────────────────────
    // Resolution and refunds (permissionless)
    // ─────────────────────────────────────────────────────────

    /// Commit the funding outcome of a project whose deadline has passed.
    ///
    /// Returns `Completed` when `total_raised >= funding_goal`, otherwise
    /// `Failed` (and emits `failed`). Succeeds at most once per project.
    pub fn resolve_outcome(env: Env, project_id: u64) -> Result<ProjectStatus, Error> {
        lifecycle::resolve_outcome(&env, project_id)
    }

    /// Pay `contributor` back their full contribution to a `Failed` project.
    ///
    /// Succeeds at most once per `(project_id, contributor)` and returns the
    /// amount transferred. Funds always go to `contributor`, whoever submits.
    pub fn refund(env: Env, project_id: u64, contributor: Address) -> Result<i128, Error> {
        refund::refund(&env, project_id, contributor)
    }

    // ─────────────────────────────────────────────────────────
    // Creator payout
    // ─────────────────────────────────────────────────────────

    /// Release the escrow of a `Completed` project to its creator.
    ///
    /// The creator must sign. Succeeds at most once per project and returns
    /// the amount transferred, which is the project's `total_raised`.
    pub fn withdraw_funds(env: Env, project_id: u64) -> Result<i128, Error> {
        withdraw::withdraw_funds(&env, project_id)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Retrieve a project by its ID.
    pub fn get_project(env: Env, project_id: u64) -> Result<Project, Error> {
        storage::load_project(&env, project_id)
    }

    /// Recorded contribution of `contributor`, or zero.
    pub fn get_contribution(env: Env, project_id: u64, contributor: Address) -> i128 {
        storage::get_contribution(&env, project_id, &contributor)
    }

    pub fn is_refunded(env: Env, project_id: u64, contributor: Address) -> bool {
        storage::is_refund_processed(&env, project_id, &contributor)
    }

    pub fn is_failure_processed(env: Env, project_id: u64) -> bool {
        storage::is_failure_processed(&env, project_id)
    }

    pub fn is_withdrawn(env: Env, project_id: u64) -> bool {
        storage::is_funds_withdrawn(&env, project_id)
    }

    pub fn project_count(env: Env) -> u64 {
        storage::project_count(&env)
    }
}
