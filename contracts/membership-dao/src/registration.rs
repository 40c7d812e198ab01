//! Seat lifecycle: bootstrap, register, deregister and forced exit.

use soroban_sdk::{log, symbol_short, Address, Env};

use crate::admin;
use crate::errors::Error;
use crate::storage::{self, Snapshot};
use crate::token;
use crate::types::{MemberRecord, MembershipToken, VoteTally};

pub fn bootstrap(env: &Env, caller: &Address) -> Result<u64, Error> {
    admin::require_creator(env, caller)?;
    if storage::snapshot(env).membership_token().is_some() {
        return Err(Error::AlreadyBootstrapped);
    }

    let token = token::issue(env);
    Ok(token.id)
}

/// The minted token, provided `token_ref` names it.
pub fn resolve_token(view: &Snapshot, token_ref: u64) -> Option<MembershipToken> {
    view.membership_token().filter(|token| token.id == token_ref)
}

pub fn register(env: &Env, account: &Address, token_ref: u64) -> Result<(), Error> {
    account.require_auth();

    let view = storage::snapshot(env);
    let mut token = resolve_token(&view, token_ref).ok_or(Error::RegistrationPrecondition)?;
    let holding = view
        .holding(account)
        .ok_or(Error::RegistrationPrecondition)?;
    if holding.balance != 0 || view.member(account).is_some() || token.reserve == 0 {
        return Err(Error::RegistrationPrecondition);
    }

    storage::set_member(env, account, &MemberRecord { has_voted: false });
    token::seat(env, &mut token, account)?;

    env.events()
        .publish((symbol_short!("register"), account.clone()), token.id);

    Ok(())
}

pub fn deregister(env: &Env, account: &Address, token_ref: u64) -> Result<(), Error> {
    account.require_auth();

    let view = storage::snapshot(env);
    let mut token = resolve_token(&view, token_ref).ok_or(Error::NotRegistered)?;
    let record = view.member(account).ok_or(Error::NotRegistered)?;
    if !token::holds_frozen_seat(&view, account) {
        return Err(Error::NotRegistered);
    }

    // Both counters drop whether or not this account voted.
    let tally = release_votes(&view)?;

    storage::set_tally(env, &tally);
    storage::remove_member(env, account);
    token::unseat(env, &mut token, account)?;

    env.events().publish(
        (symbol_short!("dereg"), account.clone()),
        (record.has_voted, tally.total, tally.in_favor),
    );

    Ok(())
}

/// Forced exit. Applies the deregister cleanup where it can and never fails:
/// a counter underflow is logged and skipped, the record and seat are always
/// released.
pub fn clear(env: &Env, account: &Address) {
    account.require_auth();

    let view = storage::snapshot(env);
    if view.member(account).is_some() {
        match release_votes(&view) {
            Ok(tally) => storage::set_tally(env, &tally),
            Err(err) => log!(env, "clear: tally left unchanged", account.clone(), err as u32),
        }
        storage::remove_member(env, account);
    }

    if let Some(mut token) = view.membership_token() {
        if token::holds_frozen_seat(&view, account) {
            if let Err(err) = token::unseat(env, &mut token, account) {
                log!(env, "clear: seat not reclaimed", account.clone(), err as u32);
            }
        }
    }

    env.events()
        .publish((symbol_short!("clear"), account.clone()), ());
}

fn release_votes(view: &Snapshot) -> Result<VoteTally, Error> {
    let tally = view.tally().unwrap_or(VoteTally {
        total: 0,
        in_favor: 0,
    });

    Ok(VoteTally {
        total: tally.total.checked_sub(1).ok_or(Error::CounterUnderflow)?,
        in_favor: tally.in_favor.checked_sub(1).ok_or(Error::CounterUnderflow)?,
    })
}
