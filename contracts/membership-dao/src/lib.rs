#![no_std]

//! Single-proposal DAO where each voting seat is one frozen unit of an
//! application-minted membership token.

mod admin;
mod constants;
mod errors;
mod queries;
mod registration;
mod storage;
mod token;
mod types;
mod voting;

pub use constants::MEMBERSHIP_TOTAL_SUPPLY;
pub use errors::{Error, ErrorKind};
pub use types::{LifecycleFlags, VoteTally};

use soroban_sdk::{contract, contractimpl, symbol_short, Address, BytesN, Env, String};

#[contract]
pub struct MembershipDao;

#[contractimpl]
impl MembershipDao {
    /// Records the creator, the proposal text and the optional deadline.
    /// Runs exactly once, when the instance is deployed.
    pub fn __constructor(
        env: Env,
        creator: Address,
        proposal: String,
        voting_deadline: Option<u64>,
        lifecycle: LifecycleFlags,
    ) {
        storage::set_creator(&env, &creator);
        storage::set_lifecycle(&env, &lifecycle);
        storage::set_proposal(&env, &proposal);
        if let Some(deadline) = voting_deadline {
            storage::set_voting_deadline(&env, deadline);
        }
        storage::bump_instance(&env);

        env.events()
            .publish((symbol_short!("created"), creator), voting_deadline);
    }

    // ── Admin Lifecycle ───────────────────────────────────────────────────────

    pub fn update(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        admin::update(&env, &caller, new_wasm_hash)
    }

    pub fn delete(env: Env, caller: Address) -> Result<(), Error> {
        admin::delete(&env, &caller)
    }

    // ── Membership Token ──────────────────────────────────────────────────────

    /// Mints the membership token. Creator only, once.
    pub fn bootstrap(env: Env, caller: Address) -> Result<u64, Error> {
        storage::bump_instance(&env);
        registration::bootstrap(&env, &caller)
    }

    /// Opens an empty holding so `account` can receive a seat.
    pub fn opt_in(env: Env, account: Address) -> Result<(), Error> {
        account.require_auth();
        storage::bump_instance(&env);
        token::opt_in(&env, &account)
    }

    pub fn transfer_membership(
        env: Env,
        from: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), Error> {
        from.require_auth();
        storage::bump_instance(&env);
        token::transfer(&env, &from, &to, amount)
    }

    // ── Registration ──────────────────────────────────────────────────────────

    pub fn register(env: Env, account: Address, membership_token: u64) -> Result<(), Error> {
        storage::bump_instance(&env);
        registration::register(&env, &account, membership_token)
    }

    pub fn deregister(env: Env, account: Address, membership_token: u64) -> Result<(), Error> {
        storage::bump_instance(&env);
        registration::deregister(&env, &account, membership_token)
    }

    /// Unconditional exit for `account`. Never returns an error.
    pub fn clear(env: Env, account: Address) {
        registration::clear(&env, &account)
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    pub fn vote(
        env: Env,
        voter: Address,
        in_favor: bool,
        membership_token: u64,
    ) -> Result<(), Error> {
        storage::bump_instance(&env);
        voting::vote(&env, &voter, in_favor, membership_token)
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn get_proposal(env: Env) -> Result<String, Error> {
        queries::get_proposal(&storage::snapshot(&env))
    }

    pub fn get_voting_deadline(env: Env) -> Result<Option<u64>, Error> {
        queries::get_voting_deadline(&storage::snapshot(&env))
    }

    pub fn get_creator(env: Env) -> Result<Address, Error> {
        queries::get_creator(&storage::snapshot(&env))
    }

    pub fn get_registered_membership_token(env: Env) -> Result<u64, Error> {
        queries::get_registered_membership_token(&storage::snapshot(&env))
    }

    pub fn get_votes(env: Env) -> Result<VoteTally, Error> {
        queries::get_votes(&storage::snapshot(&env))
    }

    pub fn is_registered(env: Env, account: Address) -> bool {
        queries::is_registered(&storage::snapshot(&env), &account)
    }

    pub fn has_voted(env: Env, account: Address) -> bool {
        queries::has_voted(&storage::snapshot(&env), &account)
    }

    pub fn membership_total_supply(env: Env) -> Result<u64, Error> {
        queries::membership_total_supply(&storage::snapshot(&env))
    }

    pub fn membership_reserve(env: Env) -> Result<u64, Error> {
        queries::membership_reserve(&storage::snapshot(&env))
    }

    pub fn membership_balance(env: Env, account: Address) -> Result<u64, Error> {
        token::balance(&storage::snapshot(&env), &account)
    }

    pub fn is_frozen(env: Env, account: Address) -> bool {
        token::is_frozen(&storage::snapshot(&env), &account)
    }

    pub fn holds_frozen_seat(env: Env, account: Address) -> bool {
        token::holds_frozen_seat(&storage::snapshot(&env), &account)
    }
}
