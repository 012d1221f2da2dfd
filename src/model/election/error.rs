use thiserror::Error;

use crate::model::{identity::Identity, proposal::ProposalId};

use super::Phase;

pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;

/// Reasons a workflow operation is rejected.
/// A rejected operation never changes the election.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Unauthorized: {0} may not perform this operation")]
    Unauthorized(Identity),
    #[error("Invalid phase: operation requires {required}, but the election is in {current}")]
    InvalidPhase { current: Phase, required: Phase },
    #[error("Invalid phase transition: cannot move from {current} to {target}")]
    InvalidPhaseTransition { current: Phase, target: Phase },
    #[error("Voter {0} is already registered")]
    AlreadyRegistered(Identity),
    #[error("Voter {0} has already voted")]
    AlreadyVoted(Identity),
    #[error("Proposal description must not be empty")]
    EmptyDescription,
    #[error("Proposal {0} not found")]
    ProposalNotFound(ProposalId),
}
