use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

use crate::{
    errors::VotingError,
    events, storage, tally,
    types::{Proposal, StatusChange, Voter, Winner, WorkflowStatus},
    workflow,
};

#[contract]
pub struct VotingContract;

fn require_admin(env: &Env, caller: &Address) -> Result<(), VotingError> {
    let admin = storage::get_admin(env).ok_or(VotingError::NotInitialized)?;
    if *caller != admin {
        log!(env, "caller is not the administrator", caller.clone());
        return Err(VotingError::Unauthorized);
    }
    Ok(())
}

fn require_registered(env: &Env, caller: &Address) -> Result<Voter, VotingError> {
    // Status doubles as the initialization marker
    workflow::current(env)?;
    let voter = storage::get_voter(env, caller);
    if !voter.is_registered {
        log!(env, "caller is not a registered voter", caller.clone());
        return Err(VotingError::NotRegistered);
    }
    Ok(voter)
}

/// Admin check plus a single forward step from `from`.
fn transition(
    env: &Env,
    caller: &Address,
    from: WorkflowStatus,
) -> Result<StatusChange, VotingError> {
    caller.require_auth();
    require_admin(env, caller)?;
    let change = workflow::advance(env, from)?;
    storage::bump_instance(env);
    Ok(change)
}

#[contractimpl]
impl VotingContract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Runs once, atomically with deployment: `admin` becomes the election
    /// administrator and never changes afterwards.
    pub fn __constructor(env: Env, admin: Address) {
        storage::set_admin(&env, &admin);
        storage::set_status(&env, WorkflowStatus::RegisteringVoters);
        storage::set_proposal_count(&env, 0);
        storage::bump_instance(&env);
    }

    // ── Voter registry ───────────────────────────────────────────────────────

    /// Register `voter` as eligible. Administrator only, `RegisteringVoters` only.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), VotingError> {
        caller.require_auth();
        require_admin(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::RegisteringVoters)?;

        if storage::get_voter(&env, &voter).is_registered {
            log!(&env, "voter already registered", voter);
            return Err(VotingError::AlreadyRegistered);
        }

        let record = Voter {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: None,
        };
        storage::save_voter(&env, &voter, &record);
        storage::increment_voter_count(&env);
        storage::bump_instance(&env);

        events::voter_registered(&env, &voter);
        Ok(())
    }

    // ── Proposal registry ────────────────────────────────────────────────────

    /// Submit a proposal as a registered voter. Returns the assigned id.
    pub fn add_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, VotingError> {
        caller.require_auth();
        require_registered(&env, &caller)?;
        workflow::require_status(&env, WorkflowStatus::ProposalsRegistrationStarted)?;

        if description.len() == 0 {
            return Err(VotingError::InvalidArgument);
        }

        let id = storage::get_proposal_count(&env);
        let proposal = Proposal {
            id,
            proposer: caller.clone(),
            description,
            vote_count: 0,
        };
        storage::save_proposal(&env, &proposal);
        storage::set_proposal_count(&env, id + 1);
        storage::bump_instance(&env);

        events::proposal_registered(&env, id, &caller);
        Ok(id)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast the caller's single vote for `proposal_id`.
    ///
    /// A voter who already voted gets `AlreadyVoted` in every phase.
    pub fn vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), VotingError> {
        caller.require_auth();
        let mut voter = require_registered(&env, &caller)?;
        if voter.has_voted {
            log!(&env, "voter already voted", caller);
            return Err(VotingError::AlreadyVoted);
        }
        workflow::require_status(&env, WorkflowStatus::VotingSessionStarted)?;

        let mut proposal =
            storage::get_proposal(&env, proposal_id).ok_or(VotingError::NotFound)?;

        voter.has_voted = true;
        voter.voted_proposal_id = Some(proposal_id);
        proposal.vote_count += 1;

        storage::save_voter(&env, &caller, &voter);
        storage::save_proposal(&env, &proposal);
        storage::bump_instance(&env);

        events::voted(&env, &caller, proposal_id);
        Ok(())
    }

    // ── Workflow ─────────────────────────────────────────────────────────────

    pub fn start_proposal_registration(
        env: Env,
        caller: Address,
    ) -> Result<StatusChange, VotingError> {
        transition(&env, &caller, WorkflowStatus::RegisteringVoters)
    }

    pub fn end_proposal_registration(
        env: Env,
        caller: Address,
    ) -> Result<StatusChange, VotingError> {
        transition(&env, &caller, WorkflowStatus::ProposalsRegistrationStarted)
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<StatusChange, VotingError> {
        transition(&env, &caller, WorkflowStatus::ProposalsRegistrationEnded)
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<StatusChange, VotingError> {
        transition(&env, &caller, WorkflowStatus::VotingSessionStarted)
    }

    /// Close the election and record the winning proposal.
    ///
    /// With no proposals the status still advances but no winner is stored.
    pub fn tally_votes(env: Env, caller: Address) -> Result<StatusChange, VotingError> {
        let change = transition(&env, &caller, WorkflowStatus::VotingSessionEnded)?;

        match tally::compute_winner(&env) {
            Some(winner) => {
                storage::set_winning_proposal(&env, winner.proposal_id);
                events::tallied(&env, &winner);
            }
            None => {
                log!(&env, "tallied an election without proposals");
            }
        }
        Ok(change)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn get_winner(env: Env) -> Result<Winner, VotingError> {
        workflow::require_status(&env, WorkflowStatus::VotesTallied)?;
        let proposal_id = storage::get_winning_proposal(&env).ok_or(VotingError::NotFound)?;
        let proposal = storage::get_proposal(&env, proposal_id).ok_or(VotingError::NotFound)?;

        Ok(Winner {
            proposal_id,
            description: proposal.description,
            vote_count: proposal.vote_count,
        })
    }

    /// Id of the winning proposal, `None` until votes are tallied.
    pub fn get_winning_proposal_id(env: Env) -> Option<u32> {
        storage::get_winning_proposal(&env)
    }

    pub fn get_workflow_status(env: Env) -> Result<WorkflowStatus, VotingError> {
        workflow::current(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, VotingError> {
        storage::get_admin(&env).ok_or(VotingError::NotInitialized)
    }

    /// Registry record for `voter`; unknown identities read as unregistered.
    pub fn get_voter(env: Env, voter: Address) -> Voter {
        storage::get_voter(&env, &voter)
    }

    pub fn voter_count(env: Env) -> u32 {
        storage::get_voter_count(&env)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, VotingError> {
        storage::get_proposal(&env, proposal_id).ok_or(VotingError::NotFound)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    /// All proposals in id order.
    pub fn get_proposals(env: Env) -> Vec<Proposal> {
        let mut proposals = Vec::new(&env);
        for id in 0..storage::get_proposal_count(&env) {
            if let Some(proposal) = storage::get_proposal(&env, id) {
                proposals.push_back(proposal);
            }
        }
        proposals
    }
}
