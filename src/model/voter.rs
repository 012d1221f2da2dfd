use serde::{Deserialize, Serialize};

use super::proposal::ProposalId;

/// A voter record, keyed by [`Identity`](super::identity::Identity) in the election.
///
/// The default value is what an unregistered identity looks like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set.
    pub voted_proposal_id: ProposalId,
}

impl Voter {
    /// A freshly registered voter who has not voted yet.
    pub fn registered() -> Self {
        Self {
            is_registered: true,
            ..Default::default()
        }
    }

    /// Record that this voter has voted for the given proposal.
    pub(crate) fn record_vote(&mut self, proposal_id: ProposalId) {
        self.has_voted = true;
        self.voted_proposal_id = proposal_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_vote() {
        let mut voter = Voter::registered();
        assert!(voter.is_registered);
        assert!(!voter.has_voted);

        voter.record_vote(3);
        assert!(voter.has_voted);
        assert_eq!(voter.voted_proposal_id, 3);
    }

    #[test]
    fn camel_case_fields() {
        let json = rocket::serde::json::serde_json::to_value(Voter::registered()).unwrap();
        assert_eq!(
            json,
            rocket::serde::json::json!({
                "isRegistered": true,
                "hasVoted": false,
                "votedProposalId": 0,
            })
        );
    }
}
