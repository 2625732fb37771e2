#![no_std]
//! # Voting Contract
//!
//! A single election driven by an administrator through six phases:
//! voter registration, proposal registration (open then closed), a voting
//! session (open then closed), and the tally that fixes the winner.
//!
//! Registered voters submit proposals and each casts exactly one vote. Every
//! mutating call takes the acting identity as `caller` and requires its
//! authorization.

mod errors;
mod events;
mod storage;
mod tally;
mod types;
mod voting;
mod workflow;

pub use errors::VotingError;
pub use types::{Proposal, StatusChange, Voter, Winner, WorkflowStatus};
pub use voting::{VotingContract, VotingContractClient};
