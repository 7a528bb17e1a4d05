//! # Refund engine
//!
//! Pays one contributor of a `Failed` project back their recorded
//! contribution, exactly once.
//!
//! The transfer is made before the `RefundProcessed` flag is written. Both
//! happen inside one invocation: if the token contract rejects the transfer
//! the whole invocation aborts and the flag is never persisted, and a
//! committed flag always implies a committed transfer.
//!
//! Refunds of different contributors touch disjoint keys and only read the
//! shared project entries, so they commute.

use soroban_sdk::{token, Address, Env};

use crate::events;
use crate::storage::{
    get_contribution, is_refund_processed, load_project_pair, mark_refund_processed,
};
use crate::types::ProjectStatus;
use crate::Error;

pub fn refund(env: &Env, project_id: u64, contributor: Address) -> Result<i128, Error> {
    let (config, state) = load_project_pair(env, project_id)?;

    if state.status != ProjectStatus::Failed {
        return Err(Error::ProjectNotActive);
    }
    if is_refund_processed(env, project_id, &contributor) {
        return Err(Error::InvalidInput);
    }
    let amount = get_contribution(env, project_id, &contributor);
    if amount <= 0 {
        return Err(Error::InvalidInput);
    }

    token::Client::new(env, &config.token).transfer(
        &env.current_contract_address(),
        &contributor,
        &amount,
    );

    mark_refund_processed(env, project_id, &contributor);
    events::emit_refund_issued(env, project_id, contributor, amount);
    Ok(amount)
}
