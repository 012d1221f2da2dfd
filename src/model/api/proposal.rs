use serde::{Deserialize, Serialize};

use crate::model::proposal::{Proposal, ProposalId};

/// A proposal that a voter wishes to submit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProposalSpec {
    pub description: String,
}

/// The index assigned to a newly submitted proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewProposal {
    pub id: ProposalId,
}

/// A vote that a voter wishes to cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSpec {
    pub proposal_id: ProposalId,
}

/// A proposal together with its index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDescription {
    pub id: ProposalId,
    pub description: String,
    pub vote_count: u64,
}

impl ProposalDescription {
    pub fn new(id: ProposalId, proposal: &Proposal) -> Self {
        Self {
            id,
            description: proposal.description.clone(),
            vote_count: proposal.vote_count,
        }
    }
}
