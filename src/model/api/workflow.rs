use serde::{Deserialize, Serialize};

use crate::model::{
    election::{Election, Phase},
    proposal::ProposalId,
};

/// Publicly visible progress of the election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatus {
    pub phase: Phase,
    pub winning_proposal_id: Option<ProposalId>,
}

impl From<&Election> for WorkflowStatus {
    fn from(election: &Election) -> Self {
        Self {
            phase: election.phase(),
            winning_proposal_id: election.winning_proposal_id(),
        }
    }
}
