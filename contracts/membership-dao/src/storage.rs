use soroban_sdk::{Address, Env, String};

use crate::constants::{
    ACCOUNT_BUMP_AMOUNT, ACCOUNT_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
};
use crate::errors::Error;
use crate::types::{DataKey, Holding, LifecycleFlags, MemberRecord, MembershipToken, VoteTally};

// ── Read-only view ───────────────────────────────────────────────────────────

/// Getter-only view of contract storage. Query paths receive this instead of
/// the `Env`, so they have no route to a setter.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    env: &'a Env,
}

pub fn snapshot(env: &Env) -> Snapshot<'_> {
    Snapshot { env }
}

impl<'a> Snapshot<'a> {
    pub fn creator(&self) -> Result<Address, Error> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Creator)
            .ok_or(Error::Uninitialized)
    }

    pub fn lifecycle(&self) -> Result<LifecycleFlags, Error> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Lifecycle)
            .ok_or(Error::Uninitialized)
    }

    pub fn proposal(&self) -> Result<String, Error> {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Proposal)
            .ok_or(Error::Uninitialized)
    }

    pub fn voting_deadline(&self) -> Option<u64> {
        self.env.storage().instance().get(&DataKey::VotingDeadline)
    }

    pub fn membership_token(&self) -> Option<MembershipToken> {
        self.env.storage().instance().get(&DataKey::MembershipToken)
    }

    pub fn tally(&self) -> Option<VoteTally> {
        self.env.storage().instance().get(&DataKey::Tally)
    }

    pub fn member(&self, account: &Address) -> Option<MemberRecord> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Member(account.clone()))
    }

    pub fn holding(&self, account: &Address) -> Option<Holding> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Holding(account.clone()))
    }
}

// ── Application state ────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_creator(env: &Env, creator: &Address) {
    env.storage().instance().set(&DataKey::Creator, creator);
}

pub fn set_lifecycle(env: &Env, flags: &LifecycleFlags) {
    env.storage().instance().set(&DataKey::Lifecycle, flags);
}

pub fn set_proposal(env: &Env, proposal: &String) {
    env.storage().instance().set(&DataKey::Proposal, proposal);
}

pub fn set_voting_deadline(env: &Env, deadline: u64) {
    env.storage()
        .instance()
        .set(&DataKey::VotingDeadline, &deadline);
}

pub fn set_membership_token(env: &Env, token: &MembershipToken) {
    env.storage()
        .instance()
        .set(&DataKey::MembershipToken, token);
}

pub fn set_tally(env: &Env, tally: &VoteTally) {
    env.storage().instance().set(&DataKey::Tally, tally);
}

/// Drops every application-level field. Per-account records are left to
/// expire with their TTL.
pub fn teardown(env: &Env) {
    let instance = env.storage().instance();
    instance.remove(&DataKey::Creator);
    instance.remove(&DataKey::Lifecycle);
    instance.remove(&DataKey::Proposal);
    instance.remove(&DataKey::VotingDeadline);
    instance.remove(&DataKey::MembershipToken);
    instance.remove(&DataKey::Tally);
}

// ── Per-account records ──────────────────────────────────────────────────────

pub fn set_member(env: &Env, account: &Address, record: &MemberRecord) {
    let key = DataKey::Member(account.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, ACCOUNT_LIFETIME_THRESHOLD, ACCOUNT_BUMP_AMOUNT);
}

pub fn remove_member(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Member(account.clone()));
}

pub fn set_holding(env: &Env, account: &Address, holding: &Holding) {
    let key = DataKey::Holding(account.clone());
    env.storage().persistent().set(&key, holding);
    env.storage()
        .persistent()
        .extend_ttl(&key, ACCOUNT_LIFETIME_THRESHOLD, ACCOUNT_BUMP_AMOUNT);
}
