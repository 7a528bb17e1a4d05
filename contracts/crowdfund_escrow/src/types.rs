//! # Types
//!
//! Shared data structures used across all modules of the escrow contract.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Project` is internally stored as two separate ledger entries:
//!
//! - [`ProjectConfig`] — written once at creation; never mutated.
//! - [`ProjectState`] — written on every contribution and on resolution.
//!
//! The public API exposes the reconstructed [`Project`] struct for convenience.
//!
//! ### Status as a Finite-State Machine
//!
//! [`ProjectStatus`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Active ──► Completed
//!    ├─────► Failed
//!    └─────► Cancelled
//! ```
//!
//! All three targets are terminal. Every mutation of `status` goes through
//! [`ProjectStatus::transition_to`], which consults the table in
//! [`ProjectStatus::can_transition_to`].

use soroban_sdk::{contracttype, Address};

use crate::Error;

/// Lifecycle status of a project.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectStatus {
    /// Accepting contributions until the deadline.
    Active,
    /// Deadline passed with the goal met.
    Completed,
    /// Deadline passed with the goal missed; contributors may claim refunds.
    Failed,
    /// Withdrawn by the creator before any contribution arrived.
    Cancelled,
}

impl ProjectStatus {
    /// The allowed `(from, to)` pairs. Everything else is rejected.
    pub fn can_transition_to(&self, next: &ProjectStatus) -> bool {
        matches!(
            (self, next),
            (ProjectStatus::Active, ProjectStatus::Completed)
                | (ProjectStatus::Active, ProjectStatus::Failed)
                | (ProjectStatus::Active, ProjectStatus::Cancelled)
        )
    }

    /// Validate and return the next status.
    pub fn transition_to(self, next: ProjectStatus) -> Result<ProjectStatus, Error> {
        if self.can_transition_to(&next) {
            Ok(next)
        } else {
            Err(Error::InvalidProjectStatus)
        }
    }
}

/// Immutable project configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    pub creator: Address,
    pub token: Address,
    pub funding_goal: i128,
    pub deadline: u64,
    pub created_at: u64,
}

/// Mutable project state, updated on contributions and resolution.
///
/// Kept small so that frequent writes (contributions) are cheap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub total_raised: i128,
    pub status: ProjectStatus,
}

/// Full on-chain representation of a crowdfunding project.
///
/// Used as the public API return type; reconstructed internally from
/// the split `ProjectConfig` + `ProjectState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Unique identifier (auto-incremented).
    pub id: u64,
    /// Address that created the project.
    pub creator: Address,
    /// Token contributions are made in and refunds are paid in.
    pub token: Address,
    /// Amount that must be raised by the deadline for the project to succeed.
    pub funding_goal: i128,
    /// Ledger timestamp after which the project can be resolved.
    pub deadline: u64,
    /// Ledger timestamp at creation.
    pub created_at: u64,
    /// Sum of all contributions received.
    pub total_raised: i128,
    /// Current lifecycle status.
    pub status: ProjectStatus,
}

impl Project {
    pub fn from_parts(config: ProjectConfig, state: ProjectState) -> Self {
        Project {
            id: config.id,
            creator: config.creator,
            token: config.token,
            funding_goal: config.funding_goal,
            deadline: config.deadline,
            created_at: config.created_at,
            total_raised: state.total_raised,
            status: state.status,
        }
    }

    /// Split back into the two storage entries.
    pub fn into_parts(self) -> (ProjectConfig, ProjectState) {
        (
            ProjectConfig {
                id: self.id,
                creator: self.creator,
                token: self.token,
                funding_goal: self.funding_goal,
                deadline: self.deadline,
                created_at: self.created_at,
            },
            ProjectState {
                total_raised: self.total_raised,
                status: self.status,
            },
        )
    }
}
