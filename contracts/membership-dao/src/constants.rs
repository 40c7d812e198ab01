//! Fixed parameters of the membership token and storage lifetimes.

// ===== Membership Token =====

/// Number of seats ever minted; upper bound on concurrently registered accounts
pub const MEMBERSHIP_TOTAL_SUPPLY: u64 = 1_000;

/// Seats are indivisible
pub const MEMBERSHIP_DECIMALS: u32 = 0;

/// Units handed to an account on registration
pub const SEAT_UNITS: u64 = 1;

/// Domain tag mixed into the token id derivation
pub const TOKEN_ID_DOMAIN: &[u8] = b"membership-dao/token";

// ===== Ledger TTL (in ledgers, ~5s each) =====

pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Application state is bumped on every mutating call
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Membership records and holdings
pub const ACCOUNT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const ACCOUNT_LIFETIME_THRESHOLD: u32 = ACCOUNT_BUMP_AMOUNT - DAY_IN_LEDGERS;
