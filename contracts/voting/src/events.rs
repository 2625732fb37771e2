//! Events published for indexers and auditors following the election.
//!
//! Each event's first topic is its type name in snake case, followed by the
//! fields marked `#[topic]`; the remaining fields form the data map.

use soroban_sdk::{contractevent, Address, Env};

use crate::types::{StatusChange, Winner, WorkflowStatus};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterRegistered {
    #[topic]
    pub voter: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkflowStatusChange {
    pub previous_status: WorkflowStatus,
    pub new_status: WorkflowStatus,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalRegistered {
    #[topic]
    pub proposal_id: u32,
    pub proposer: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voted {
    #[topic]
    pub voter: Address,
    pub proposal_id: u32,
}

/// Published after the `WorkflowStatusChange` of a tally that found a winner.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VotesTallied {
    #[topic]
    pub proposal_id: u32,
    pub vote_count: u32,
}

pub fn voter_registered(env: &Env, voter: &Address) {
    VoterRegistered {
        voter: voter.clone(),
    }
    .publish(env);
}

pub fn workflow_status_change(env: &Env, change: &StatusChange) {
    WorkflowStatusChange {
        previous_status: change.previous,
        new_status: change.next,
    }
    .publish(env);
}

pub fn proposal_registered(env: &Env, proposal_id: u32, proposer: &Address) {
    ProposalRegistered {
        proposal_id,
        proposer: proposer.clone(),
    }
    .publish(env);
}

pub fn voted(env: &Env, voter: &Address, proposal_id: u32) {
    Voted {
        voter: voter.clone(),
        proposal_id,
    }
    .publish(env);
}

pub fn tallied(env: &Env, winner: &Winner) {
    VotesTallied {
        proposal_id: winner.proposal_id,
        vote_count: winner.vote_count,
    }
    .publish(env);
}
