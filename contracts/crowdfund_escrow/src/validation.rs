//! Creation-time bounds on new projects.

use crate::Error;

/// Smallest accepted funding goal, in token base units.
pub const MIN_FUNDING_GOAL: i128 = 1_000;

/// Shortest funding window: one day.
pub const MIN_PROJECT_DURATION: u64 = 86_400;

/// Longest funding window: 180 days.
pub const MAX_PROJECT_DURATION: u64 = 180 * 86_400;

pub fn validate_funding_goal(funding_goal: i128) -> Result<(), Error> {
    if funding_goal < MIN_FUNDING_GOAL {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// `deadline` must lie within the allowed window measured from `now`.
pub fn validate_deadline(now: u64, deadline: u64) -> Result<(), Error> {
    let duration = deadline.checked_sub(now).ok_or(Error::InvalidInput)?;
    if !(MIN_PROJECT_DURATION..=MAX_PROJECT_DURATION).contains(&duration) {
        return Err(Error::InvalidInput);
    }
    Ok(())
}
