use soroban_sdk::{log, Env};

use crate::{
    errors::VotingError,
    events, storage,
    types::{StatusChange, WorkflowStatus},
};

impl WorkflowStatus {
    /// The status entered from `self`, or `None` once votes are tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => {
                Some(WorkflowStatus::ProposalsRegistrationStarted)
            }
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => {
                Some(WorkflowStatus::VotingSessionStarted)
            }
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

/// Current status; `NotInitialized` if the election state is missing.
pub fn current(env: &Env) -> Result<WorkflowStatus, VotingError> {
    storage::get_status(env).ok_or(VotingError::NotInitialized)
}

/// Fails with `InvalidPhase` unless the election is exactly in `required`.
pub fn require_status(env: &Env, required: WorkflowStatus) -> Result<(), VotingError> {
    let status = current(env)?;
    if status != required {
        log!(env, "operation rejected in phase", status, required);
        return Err(VotingError::InvalidPhase);
    }
    Ok(())
}

/// Moves the election one step forward from `from`.
///
/// The caller has already been checked against the administrator. Nothing is
/// written unless the current status is exactly `from`.
pub fn advance(env: &Env, from: WorkflowStatus) -> Result<StatusChange, VotingError> {
    require_status(env, from)?;
    let next = from.next().ok_or(VotingError::InvalidPhase)?;

    storage::set_status(env, next);
    let change = StatusChange {
        previous: from,
        next,
    };
    events::workflow_status_change(env, &change);
    Ok(change)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_walks_every_phase_once() {
        let mut status = WorkflowStatus::RegisteringVoters;
        let mut steps = 0;
        while let Some(next) = status.next() {
            assert!(next > status);
            assert_eq!(next as u32, status as u32 + 1);
            status = next;
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert_eq!(status, WorkflowStatus::VotesTallied);
    }

    #[test]
    fn test_tallied_is_terminal() {
        assert_eq!(WorkflowStatus::VotesTallied.next(), None);
    }
}
