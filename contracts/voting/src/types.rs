use soroban_sdk::{contracttype, Address, String};

/// Phases of the election, in the only order they can be entered.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WorkflowStatus {
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

/// Registry record for a voter identity.
///
/// Identities that were never registered read as `Voter::default()`.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Set together with `has_voted`, never cleared
    pub voted_proposal_id: Option<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// Sequential id, starting at 0
    pub id: u32,
    /// Registered voter who submitted the proposal
    pub proposer: Address,
    pub description: String,
    pub vote_count: u32,
}

/// Result of the tally, readable once the election is `VotesTallied`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Winner {
    pub proposal_id: u32,
    pub description: String,
    pub vote_count: u32,
}

/// Returned by every workflow transition; mirrors the `wf_change` event.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatusChange {
    pub previous: WorkflowStatus,
    pub next: WorkflowStatus,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Admin,
    Status,
    ProposalCount,
    VoterCount,
    WinningProposal,
    // Persistent storage
    Voter(Address),
    Proposal(u32),
}
