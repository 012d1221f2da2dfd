use std::fmt::{Display, Formatter};
use std::sync::mpsc::Sender;

use log::info;
use serde::{Deserialize, Serialize};

use super::{election::Phase, identity::Identity, proposal::ProposalId};

/// A notification emitted whenever the election changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum WorkflowEvent {
    VoterRegistered {
        voter: Identity,
    },
    ProposalRegistered {
        #[serde(rename = "proposalId")]
        proposal_id: ProposalId,
    },
    Voted {
        voter: Identity,
        #[serde(rename = "proposalId")]
        proposal_id: ProposalId,
    },
    WorkflowStatusChange {
        previous: Phase,
        new: Phase,
    },
}

impl Display for WorkflowEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VoterRegistered { voter } => write!(f, "Voter {voter} registered"),
            Self::ProposalRegistered { proposal_id } => {
                write!(f, "Proposal {proposal_id} registered")
            }
            Self::Voted { voter, proposal_id } => {
                write!(f, "Voter {voter} voted for proposal {proposal_id}")
            }
            Self::WorkflowStatusChange { previous, new } => {
                write!(f, "Workflow moved from {previous} to {new}")
            }
        }
    }
}

/// Something that wants to hear about election changes.
/// Delivery is one-way: observers cannot reject or delay an event.
pub trait Observer: Send {
    fn notify(&mut self, event: &WorkflowEvent);
}

/// Writes every event to the application log.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn notify(&mut self, event: &WorkflowEvent) {
        info!("{event}");
    }
}

/// Forward events down a channel. A closed channel is silently ignored.
impl Observer for Sender<WorkflowEvent> {
    fn notify(&mut self, event: &WorkflowEvent) {
        let _ = self.send(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::{json, serde_json};

    use super::*;

    #[test]
    fn wire_format() {
        let event = WorkflowEvent::Voted {
            voter: "alice".parse().unwrap(),
            proposal_id: 2,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "Voted", "voter": "alice", "proposalId": 2})
        );

        let event = WorkflowEvent::WorkflowStatusChange {
            previous: Phase::RegisteringVoters,
            new: Phase::ProposalsRegistrationStarted,
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"event": "WorkflowStatusChange", "previous": 0, "new": 1})
        );
    }

    #[test]
    fn channel_observer() {
        let (mut sender, receiver) = std::sync::mpsc::channel();
        let event = WorkflowEvent::ProposalRegistered { proposal_id: 1 };
        sender.notify(&event);
        assert_eq!(receiver.try_recv(), Ok(event));

        // Nobody listening any more; must not panic.
        drop(receiver);
        sender.notify(&WorkflowEvent::ProposalRegistered { proposal_id: 2 });
    }
}
