//! Error codes returned by the voting contract.
//!
//! Codes are stable: clients match on the numeric value, so new variants are
//! only ever appended.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the election administrator
    Unauthorized = 1,

    /// Election state is missing from contract storage
    NotInitialized = 2,

    /// Operation is not permitted in the current workflow status
    InvalidPhase = 3,

    /// Caller is not a registered voter
    NotRegistered = 4,

    /// Voter identity is already in the registry
    AlreadyRegistered = 5,

    /// Voter has already cast their vote
    AlreadyVoted = 6,

    /// Malformed argument, e.g. an empty proposal description
    InvalidArgument = 7,

    /// Unknown proposal id, or no winner was recorded
    NotFound = 8,
}
