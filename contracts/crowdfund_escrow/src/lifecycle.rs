//! # Lifecycle resolver
//!
//! Commits the terminal funding outcome of a project once its deadline has
//! passed. Anyone may call it; correctness rests on three checks evaluated
//! before any write:
//!
//! 1. the project exists (`NotFound`),
//! 2. the ledger clock is strictly past the deadline (`InvalidInput`),
//! 3. no outcome has been committed yet and the project is still `Active`
//!    (`InvalidProjectStatus`).
//!
//! The `FailureProcessed` flag is the last write of a successful resolution.
//! Any later call, whatever its submission order, sees the flag and aborts.

use soroban_sdk::Env;

use crate::events;
use crate::storage::{
    is_failure_processed, load_project_pair, mark_failure_processed, save_project_state,
};
use crate::types::ProjectStatus;
use crate::Error;

pub fn resolve_outcome(env: &Env, project_id: u64) -> Result<ProjectStatus, Error> {
    let (config, mut state) = load_project_pair(env, project_id)?;

    if env.ledger().timestamp() <= config.deadline {
        return Err(Error::InvalidInput);
    }
    if is_failure_processed(env, project_id) || state.status != ProjectStatus::Active {
        return Err(Error::InvalidProjectStatus);
    }

    let outcome = if state.total_raised >= config.funding_goal {
        ProjectStatus::Completed
    } else {
        ProjectStatus::Failed
    };
    state.status = state.status.transition_to(outcome)?;
    save_project_state(env, project_id, &state);

    if outcome == ProjectStatus::Failed {
        events::emit_project_failed(env, project_id);
    }

    mark_failure_processed(env, project_id);
    Ok(outcome)
}
