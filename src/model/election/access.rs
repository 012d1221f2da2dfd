use std::collections::HashMap;

use crate::model::{identity::Identity, voter::Voter};

use super::{WorkflowError, WorkflowResult};

/// Decides who may invoke administrative and voter-only operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessController {
    administrator: Identity,
}

impl AccessController {
    pub fn new(administrator: Identity) -> Self {
        Self { administrator }
    }

    /// The single identity allowed to drive the workflow.
    pub fn administrator(&self) -> &Identity {
        &self.administrator
    }

    /// Reject any caller other than the administrator.
    pub fn require_admin(&self, caller: &Identity) -> WorkflowResult<()> {
        if *caller == self.administrator {
            Ok(())
        } else {
            Err(WorkflowError::Unauthorized(caller.clone()))
        }
    }

    /// Reject any caller without a voter record, returning the record otherwise.
    /// Being the administrator grants nothing here.
    pub fn require_voter<'v>(
        &self,
        voters: &'v HashMap<Identity, Voter>,
        caller: &Identity,
    ) -> WorkflowResult<&'v Voter> {
        voters
            .get(caller)
            .filter(|voter| voter.is_registered)
            .ok_or_else(|| WorkflowError::Unauthorized(caller.clone()))
    }
}
