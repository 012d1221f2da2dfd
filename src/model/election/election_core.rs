use std::collections::HashMap;

use log::{debug, info};

use crate::model::{
    event::{Observer, WorkflowEvent},
    identity::Identity,
    proposal::{Proposal, ProposalId},
    voter::Voter,
};

use super::{
    access::AccessController, tally::plurality_winner, Phase, WorkflowError, WorkflowResult,
};

/// The single authoritative election state.
///
/// Every operation takes the identity of its caller, checks access, then the
/// current phase, then its own preconditions, and only then mutates. A
/// rejected operation therefore leaves the election exactly as it was.
pub struct Election {
    access: AccessController,
    seed_genesis_proposal: bool,
    phase: Phase,
    voters: HashMap<Identity, Voter>,
    proposals: Vec<Proposal>,
    winning_proposal_id: Option<ProposalId>,
    events: Vec<WorkflowEvent>,
    observers: Vec<Box<dyn Observer>>,
}

impl Election {
    /// Create an election run by `administrator`, in the voter registration phase.
    /// A genesis proposal is seeded by default.
    pub fn new(administrator: Identity) -> Self {
        Self {
            access: AccessController::new(administrator),
            seed_genesis_proposal: true,
            phase: Phase::default(),
            voters: HashMap::new(),
            proposals: Vec::new(),
            winning_proposal_id: None,
            events: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Choose whether opening proposal registration seeds the genesis proposal
    /// at index 0. Without it, the first submitted proposal gets index 0.
    pub fn with_genesis_proposal(mut self, seed: bool) -> Self {
        self.seed_genesis_proposal = seed;
        self
    }

    /// Attach an observer that will be told about every future event.
    pub fn with_observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    pub fn administrator(&self) -> &Identity {
        self.access.administrator()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Only present once votes have been tallied.
    pub fn winning_proposal_id(&self) -> Option<ProposalId> {
        self.winning_proposal_id
    }

    /// Every event emitted so far, oldest first.
    pub fn events(&self) -> &[WorkflowEvent] {
        &self.events
    }

    /// Register a new voter.
    pub fn add_voter(&mut self, caller: &Identity, voter: Identity) -> WorkflowResult<()> {
        self.access.require_admin(caller)?;
        self.require_phase(Phase::RegisteringVoters)?;
        if self.voters.get(&voter).map_or(false, |v| v.is_registered) {
            return Err(WorkflowError::AlreadyRegistered(voter));
        }

        self.voters.insert(voter.clone(), Voter::registered());
        self.emit(WorkflowEvent::VoterRegistered { voter });
        Ok(())
    }

    /// Open proposal registration, seeding the genesis proposal if configured.
    pub fn start_proposals_registering(&mut self, caller: &Identity) -> WorkflowResult<()> {
        self.check_transition(caller, Phase::ProposalsRegistrationStarted)?;
        if self.seed_genesis_proposal {
            self.proposals.push(Proposal::genesis());
        }
        self.commit_transition(Phase::ProposalsRegistrationStarted);
        Ok(())
    }

    /// Submit a proposal, returning its index.
    pub fn add_proposal(
        &mut self,
        caller: &Identity,
        description: impl Into<String>,
    ) -> WorkflowResult<ProposalId> {
        self.access.require_voter(&self.voters, caller)?;
        self.require_phase(Phase::ProposalsRegistrationStarted)?;
        let description = description.into();
        if Proposal::is_blank(&description) {
            return Err(WorkflowError::EmptyDescription);
        }

        // Memory runs out long before the index space does.
        let proposal_id = self.proposals.len() as ProposalId;
        self.proposals.push(Proposal::new(description));
        self.emit(WorkflowEvent::ProposalRegistered { proposal_id });
        Ok(proposal_id)
    }

    /// Close proposal registration.
    pub fn end_proposals_registering(&mut self, caller: &Identity) -> WorkflowResult<()> {
        self.transition(caller, Phase::ProposalsRegistrationEnded)
    }

    /// Open the voting session.
    pub fn start_voting_session(&mut self, caller: &Identity) -> WorkflowResult<()> {
        self.transition(caller, Phase::VotingSessionStarted)
    }

    /// Cast the caller's single vote.
    pub fn set_vote(&mut self, caller: &Identity, proposal_id: ProposalId) -> WorkflowResult<()> {
        let already_voted = self.access.require_voter(&self.voters, caller)?.has_voted;
        self.require_phase(Phase::VotingSessionStarted)?;
        if already_voted {
            return Err(WorkflowError::AlreadyVoted(caller.clone()));
        }
        let proposal = self
            .proposals
            .get_mut(proposal_id as usize)
            .ok_or(WorkflowError::ProposalNotFound(proposal_id))?;

        proposal.vote_count += 1;
        if let Some(voter) = self.voters.get_mut(caller) {
            voter.record_vote(proposal_id);
        }
        self.emit(WorkflowEvent::Voted {
            voter: caller.clone(),
            proposal_id,
        });
        Ok(())
    }

    /// Close the voting session.
    pub fn end_voting_session(&mut self, caller: &Identity) -> WorkflowResult<()> {
        self.transition(caller, Phase::VotingSessionEnded)
    }

    /// Compute the plurality winner and finish the election.
    pub fn tally_votes(&mut self, caller: &Identity) -> WorkflowResult<ProposalId> {
        self.access.require_admin(caller)?;
        self.require_phase(Phase::VotingSessionEnded)?;

        let winner = plurality_winner(&self.proposals);
        info!(
            "Tallied {} proposals, proposal {winner} wins",
            self.proposals.len()
        );
        self.winning_proposal_id = Some(winner);
        self.commit_transition(Phase::VotesTallied);
        Ok(winner)
    }

    /// Look up the voter record for `identity`. Identities without a record
    /// read as an unregistered default.
    pub fn voter(&self, caller: &Identity, identity: &Identity) -> WorkflowResult<Voter> {
        self.access.require_voter(&self.voters, caller)?;
        Ok(self.voters.get(identity).copied().unwrap_or_default())
    }

    /// Look up a single proposal.
    pub fn proposal(
        &self,
        caller: &Identity,
        proposal_id: ProposalId,
    ) -> WorkflowResult<&Proposal> {
        self.access.require_voter(&self.voters, caller)?;
        self.proposals
            .get(proposal_id as usize)
            .ok_or(WorkflowError::ProposalNotFound(proposal_id))
    }

    /// The winning proposal, once votes have been tallied.
    pub fn winner(&self) -> WorkflowResult<(ProposalId, &Proposal)> {
        let winner = self
            .winning_proposal_id
            .ok_or(WorkflowError::InvalidPhase {
                current: self.phase,
                required: Phase::VotesTallied,
            })?;
        self.proposals
            .get(winner as usize)
            .map(|proposal| (winner, proposal))
            .ok_or(WorkflowError::ProposalNotFound(winner))
    }

    fn require_phase(&self, required: Phase) -> WorkflowResult<()> {
        if self.phase == required {
            Ok(())
        } else {
            Err(WorkflowError::InvalidPhase {
                current: self.phase,
                required,
            })
        }
    }

    /// Check that `caller` may move the workflow to `target` right now.
    fn check_transition(&self, caller: &Identity, target: Phase) -> WorkflowResult<()> {
        self.access.require_admin(caller)?;
        if self.phase.next() == Some(target) {
            Ok(())
        } else {
            Err(WorkflowError::InvalidPhaseTransition {
                current: self.phase,
                target,
            })
        }
    }

    fn commit_transition(&mut self, target: Phase) {
        let previous = std::mem::replace(&mut self.phase, target);
        self.emit(WorkflowEvent::WorkflowStatusChange {
            previous,
            new: target,
        });
    }

    /// A transition with no side effect beyond the phase change.
    fn transition(&mut self, caller: &Identity, target: Phase) -> WorkflowResult<()> {
        self.check_transition(caller, target)?;
        self.commit_transition(target);
        Ok(())
    }

    fn emit(&mut self, event: WorkflowEvent) {
        debug!("Emitting event {event:?}");
        for observer in self.observers.iter_mut() {
            observer.notify(&event);
        }
        self.events.push(event);
    }
}
