use serde::{Deserialize, Serialize};

/// Proposals are identified by their 0-based submission index.
pub type ProposalId = u32;

/// Description of the proposal seeded at index 0 when proposal registration opens.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// A submitted option, accumulating votes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub description: String,
    pub vote_count: u64,
}

impl Proposal {
    /// Create a proposal with no votes.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            vote_count: 0,
        }
    }

    /// The placeholder proposal occupying index 0.
    pub fn genesis() -> Self {
        Self::new(GENESIS_DESCRIPTION)
    }

    /// Is this description unusable, i.e. empty or only whitespace?
    pub fn is_blank(description: &str) -> bool {
        description.trim().is_empty()
    }
}
