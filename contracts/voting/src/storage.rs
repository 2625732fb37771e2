use soroban_sdk::{Address, Env};

use crate::types::{DataKey, Proposal, Voter, WorkflowStatus};

// ── Ledger TTL constants ─────────────────────────────────────────────────────
// ~5s per ledger: 17,280 ledgers per day.
const DAY_IN_LEDGERS: u32 = 17_280;

// Admin, status and counters live in instance storage and are bumped on
// every mutating call.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Voter and proposal records must outlive the election so results stay
// auditable after the tally.
const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Admin ────────────────────────────────────────────────────────────────────

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

// ── Workflow status ──────────────────────────────────────────────────────────

pub fn set_status(env: &Env, status: WorkflowStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}

pub fn get_status(env: &Env) -> Option<WorkflowStatus> {
    env.storage().instance().get(&DataKey::Status)
}

// ── Voters ───────────────────────────────────────────────────────────────────

pub fn get_voter(env: &Env, voter: &Address) -> Voter {
    env.storage()
        .persistent()
        .get(&DataKey::Voter(voter.clone()))
        .unwrap_or_default()
}

pub fn save_voter(env: &Env, address: &Address, voter: &Voter) {
    let key = DataKey::Voter(address.clone());
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn get_voter_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::VoterCount)
        .unwrap_or(0)
}

pub fn increment_voter_count(env: &Env) {
    let count = get_voter_count(env) + 1;
    env.storage().instance().set(&DataKey::VoterCount, &count);
}

// ── Proposals ────────────────────────────────────────────────────────────────

/// Number of stored proposals, which is also the next id to assign.
pub fn get_proposal_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

pub fn get_proposal(env: &Env, proposal_id: u32) -> Option<Proposal> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// ── Tally result ─────────────────────────────────────────────────────────────

pub fn set_winning_proposal(env: &Env, proposal_id: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposal, &proposal_id);
}

pub fn get_winning_proposal(env: &Env) -> Option<u32> {
    env.storage().instance().get(&DataKey::WinningProposal)
}
