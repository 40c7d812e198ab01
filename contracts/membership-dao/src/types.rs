use soroban_sdk::{contracttype, Address};

/// Storage keys. Application-level fields live in instance storage,
/// per-account records in persistent storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Creator,
    Lifecycle,
    Proposal,
    VotingDeadline,
    MembershipToken,
    Tally,
    Member(Address),
    Holding(Address),
}

/// Which lifecycle operations the deployer allows the creator to run.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LifecycleFlags {
    pub updatable: bool,
    pub deletable: bool,
}

/// The scarce seat token minted by `bootstrap`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MembershipToken {
    pub id: u64,
    pub total_supply: u64,
    pub decimals: u32,
    /// Units still held by the application
    pub reserve: u64,
    /// Account allowed to freeze individual holdings (the contract itself)
    pub freeze_authority: Address,
}

/// One account's position in the membership token.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Holding {
    pub balance: u64,
    pub frozen: bool,
}

/// Per-account record created by `register`, destroyed by `deregister`/`clear`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MemberRecord {
    pub has_voted: bool,
}

/// Aggregate vote counters, returned by `get_votes`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VoteTally {
    pub total: u64,
    pub in_favor: u64,
}
