use std::fmt::{Display, Formatter};

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Phases of the election workflow, in the only order they may occur.
/// On the wire each phase is its integer code.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize_repr, Deserialize_repr,
)]
#[repr(u8)]
pub enum Phase {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl Phase {
    /// Every phase, in workflow order.
    pub const ALL: [Phase; 6] = [
        Phase::RegisteringVoters,
        Phase::ProposalsRegistrationStarted,
        Phase::ProposalsRegistrationEnded,
        Phase::VotingSessionStarted,
        Phase::VotingSessionEnded,
        Phase::VotesTallied,
    ];

    /// The phase that legally follows this one, if any.
    pub fn next(self) -> Option<Phase> {
        match self {
            Self::RegisteringVoters => Some(Self::ProposalsRegistrationStarted),
            Self::ProposalsRegistrationStarted => Some(Self::ProposalsRegistrationEnded),
            Self::ProposalsRegistrationEnded => Some(Self::VotingSessionStarted),
            Self::VotingSessionStarted => Some(Self::VotingSessionEnded),
            Self::VotingSessionEnded => Some(Self::VotesTallied),
            Self::VotesTallied => None,
        }
    }

    /// Has the workflow finished?
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::RegisteringVoters
    }
}

impl Display for Phase {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::RegisteringVoters => "RegisteringVoters",
                Self::ProposalsRegistrationStarted => "ProposalsRegistrationStarted",
                Self::ProposalsRegistrationEnded => "ProposalsRegistrationEnded",
                Self::VotingSessionStarted => "VotingSessionStarted",
                Self::VotingSessionEnded => "VotingSessionEnded",
                Self::VotesTallied => "VotesTallied",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json;

    use super::*;

    #[test]
    fn strictly_linear() {
        for pair in Phase::ALL.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert!(pair[0] < pair[1]);
        }
        assert!(Phase::VotesTallied.is_terminal());
        assert_eq!(
            Phase::ALL.iter().filter(|phase| phase.is_terminal()).count(),
            1
        );
    }

    #[test]
    fn integer_codes() {
        for (code, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(serde_json::to_string(phase).unwrap(), code.to_string());
            assert_eq!(
                serde_json::from_str::<Phase>(&code.to_string()).unwrap(),
                *phase
            );
        }
        assert!(serde_json::from_str::<Phase>("6").is_err());
    }
}
