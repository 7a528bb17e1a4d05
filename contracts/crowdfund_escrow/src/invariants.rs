#![allow(dead_code)]

extern crate std;

use crate::types::{Project, ProjectStatus};
use crate::validation::{MAX_PROJECT_DURATION, MIN_FUNDING_GOAL, MIN_PROJECT_DURATION};

/// INV-1: `total_raised` must never be negative.
pub fn assert_total_raised_non_negative(project: &Project) {
    assert!(
        project.total_raised >= 0,
        "INV-1 violated: project {} has negative total_raised ({})",
        project.id,
        project.total_raised
    );
}

/// INV-2: the funding goal respects the creation-time minimum.
pub fn assert_goal_bounded(project: &Project) {
    assert!(
        project.funding_goal >= MIN_FUNDING_GOAL,
        "INV-2 violated: project {} has goal {} below minimum",
        project.id,
        project.funding_goal
    );
}

/// INV-3: the funding window respects the creation-time bounds.
pub fn assert_deadline_bounded(project: &Project) {
    let duration = project.deadline - project.created_at;
    assert!(
        (MIN_PROJECT_DURATION..=MAX_PROJECT_DURATION).contains(&duration),
        "INV-3 violated: project {} has a {}s funding window",
        project.id,
        duration
    );
}

/// INV-4: only the transitions in the status table are ever observed.
pub fn assert_valid_status_transition(from: &ProjectStatus, to: &ProjectStatus) {
    assert!(
        from == to || from.can_transition_to(to),
        "INV-4 violated: invalid status transition from {:?} to {:?}",
        from,
        to
    );
}

/// INV-5: the failure flag is set exactly when the resolver decided the outcome.
pub fn assert_flag_matches_status(project: &Project, failure_processed: bool) {
    let resolved = matches!(
        project.status,
        ProjectStatus::Completed | ProjectStatus::Failed
    );
    assert_eq!(
        failure_processed, resolved,
        "INV-5 violated: project {} is {:?} but failure flag is {}",
        project.id, project.status, failure_processed
    );
}

/// INV-6: refunds never pay out more than was raised.
pub fn assert_refunds_within_raised(project: &Project, refunded_total: i128) {
    assert!(
        refunded_total <= project.total_raised,
        "INV-6 violated: project {} refunded {} of {} raised",
        project.id,
        refunded_total,
        project.total_raised
    );
}

/// INV-7: fields fixed at creation never change.
pub fn assert_project_immutable_fields(original: &Project, current: &Project) {
    assert_eq!(original.id, current.id, "INV-7 violated: project id changed");
    assert_eq!(
        original.creator, current.creator,
        "INV-7 violated: project creator changed"
    );
    assert_eq!(
        original.token, current.token,
        "INV-7 violated: project token changed"
    );
    assert_eq!(
        original.funding_goal, current.funding_goal,
        "INV-7 violated: project funding_goal changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "INV-7 violated: project deadline changed"
    );
}

/// INV-8: only a completed project's escrow can have gone to its creator.
pub fn assert_withdrawal_matches_status(project: &Project, withdrawn: bool) {
    assert!(
        !withdrawn || project.status == ProjectStatus::Completed,
        "INV-8 violated: project {} is {:?} but its funds were withdrawn",
        project.id,
        project.status
    );
}

/// Run all stateless project invariants.
pub fn assert_all_project_invariants(project: &Project) {
    assert_total_raised_non_negative(project);
    assert_goal_bounded(project);
    assert_deadline_bounded(project);
}
