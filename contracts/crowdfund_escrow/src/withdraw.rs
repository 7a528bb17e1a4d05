//! # Creator withdrawal
//!
//! Releases the escrow of a `Completed` project to its creator, once.
//! Mirrors the refund engine: checks first, then the transfer, then the
//! `FundsWithdrawn` flag, all inside one invocation.

use soroban_sdk::{token, Env};

use crate::events;
use crate::storage::{is_funds_withdrawn, load_project_pair, mark_funds_withdrawn};
use crate::types::ProjectStatus;
use crate::Error;

pub fn withdraw_funds(env: &Env, project_id: u64) -> Result<i128, Error> {
    let (config, state) = load_project_pair(env, project_id)?;
    config.creator.require_auth();

    if state.status != ProjectStatus::Completed {
        return Err(Error::ProjectNotActive);
    }
    if is_funds_withdrawn(env, project_id) {
        return Err(Error::InvalidInput);
    }

    // Completed implies total_raised >= funding_goal > 0.
    let amount = state.total_raised;
    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        &config.creator,
        &amount,
    );

    mark_funds_withdrawn(env, project_id);
    events::emit_funds_withdrawn(env, project_id, config.creator, amount);
    Ok(amount)
}
