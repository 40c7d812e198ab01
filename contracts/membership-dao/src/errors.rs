//! Error codes for the membership DAO contract.
//!
//! Codes are stable and grouped by category:
//! - 1-9: authorization and lifecycle
//! - 10-19: state existence and registration preconditions
//! - 20-29: membership token ledger
//! - 30-39: voting invariants

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ===== Authorization / Lifecycle (1-9) =====
    /// Caller is not the creator of this instance
    Unauthorized = 1,

    /// Deployment flags forbid the requested lifecycle operation
    NotPermitted = 2,

    // ===== State Preconditions (10-19) =====
    /// Application state has not been created, or was torn down
    Uninitialized = 10,

    /// Membership token was already minted
    AlreadyBootstrapped = 11,

    /// Membership token has not been minted yet
    NotBootstrapped = 12,

    /// Caller cannot register: token missing or mismatched, no holding,
    /// non-zero balance, or no seats left
    RegistrationPrecondition = 13,

    /// Caller does not hold a registered seat
    NotRegistered = 14,

    /// No vote has been cast yet, so there is no tally
    NoVotesYet = 15,

    // ===== Membership Token (20-29) =====
    /// Account has no holding record for the membership token
    HoldingNotFound = 20,

    /// Account already has a holding record
    AlreadyOptedIn = 21,

    /// Sender holds fewer units than requested
    InsufficientBalance = 22,

    /// Holding is frozen against transfer
    HoldingFrozen = 23,

    /// Transfer amount must be positive
    InvalidAmount = 24,

    // ===== Voting Invariants (30-39) =====
    /// Account already voted in the current membership cycle
    AlreadyVoted = 30,

    /// Voting deadline has passed
    VotingClosed = 31,

    /// A tally counter would drop below zero
    CounterUnderflow = 32,
}

/// Coarse classification of [`Error`] codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Caller identity check failed
    Unauthorized,
    /// A state-existence or balance check failed
    PreconditionFailed,
    /// The operation would break a voting invariant
    InvariantViolation,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized | Error::NotPermitted => ErrorKind::Unauthorized,
            Error::AlreadyVoted | Error::VotingClosed | Error::CounterUnderflow => {
                ErrorKind::InvariantViolation
            }
            Error::Uninitialized
            | Error::AlreadyBootstrapped
            | Error::NotBootstrapped
            | Error::RegistrationPrecondition
            | Error::NotRegistered
            | Error::NoVotesYet
            | Error::HoldingNotFound
            | Error::AlreadyOptedIn
            | Error::InsufficientBalance
            | Error::HoldingFrozen
            | Error::InvalidAmount => ErrorKind::PreconditionFailed,
        }
    }
}
