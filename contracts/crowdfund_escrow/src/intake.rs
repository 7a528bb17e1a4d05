//! # Intake
//!
//! Project creation, contributions, and cancellation. These are the only
//! paths that write `total_raised` or contribution records; the resolver and
//! refund engine only read them.
//!
//! Contribution accounting keeps one invariant the rest of the contract
//! relies on: the sum of all contribution records of a project equals its
//! `total_raised`. Both are updated in the same invocation as the token
//! transfer, so either all three land or none do.

use soroban_sdk::{token, Address, Env};

use crate::events;
use crate::storage::{
    get_and_increment_project_id, get_contribution, load_project_pair, save_project,
    save_project_state, set_contribution,
};
use crate::types::{Project, ProjectStatus};
use crate::validation::{validate_deadline, validate_funding_goal};
use crate::Error;

pub fn create_project(
    env: &Env,
    creator: Address,
    token: Address,
    funding_goal: i128,
    deadline: u64,
) -> Result<Project, Error> {
    let now = env.ledger().timestamp();
    validate_funding_goal(funding_goal)?;
    validate_deadline(now, deadline)?;

    let id = get_and_increment_project_id(env)?;
    let project = Project {
        id,
        creator: creator.clone(),
        token: token.clone(),
        funding_goal,
        deadline,
        created_at: now,
        total_raised: 0,
        status: ProjectStatus::Active,
    };
    save_project(env, &project);

    events::emit_project_created(env, id, creator, token, funding_goal, deadline);
    Ok(project)
}

pub fn contribute(
    env: &Env,
    project_id: u64,
    contributor: Address,
    amount: i128,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidInput);
    }

    let (config, mut state) = load_project_pair(env, project_id)?;
    if state.status != ProjectStatus::Active {
        return Err(Error::ProjectNotActive);
    }
    if env.ledger().timestamp() > config.deadline {
        return Err(Error::DeadlinePassed);
    }

    let contributed = get_contribution(env, project_id, &contributor)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    state.total_raised = state
        .total_raised
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    // Pull the funds into escrow; a failed transfer aborts the invocation.
    token::Client::new(env, &config.token).transfer(
        &contributor,
        &env.current_contract_address(),
        &amount,
    );

    set_contribution(env, project_id, &contributor, contributed);
    save_project_state(env, project_id, &state);

    events::emit_contribution_received(env, project_id, contributor, amount);
    Ok(())
}

/// Withdraw a project that has not received anything yet.
///
/// Refunds are only paid for `Failed` projects, so cancelling a project that
/// holds escrowed funds would strand them; such projects must run to their
/// deadline instead.
pub fn cancel_project(env: &Env, project_id: u64) -> Result<(), Error> {
    let (config, mut state) = load_project_pair(env, project_id)?;
    config.creator.require_auth();

    state.status = state.status.transition_to(ProjectStatus::Cancelled)?;
    if state.total_raised != 0 {
        return Err(Error::ProjectHasContributions);
    }
    save_project_state(env, project_id, &state);

    events::emit_project_cancelled(env, project_id, config.creator);
    Ok(())
}
