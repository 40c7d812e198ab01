use soroban_sdk::{symbol_short, Address, Env};

use crate::errors::Error;
use crate::registration::resolve_token;
use crate::storage;
use crate::token;
use crate::types::VoteTally;

/// Casts `voter`'s single vote for the current membership cycle.
///
/// Guards run in order: seat held, not yet voted, deadline not reached.
/// The flag and both counters are written only after every guard passes.
pub fn vote(env: &Env, voter: &Address, in_favor: bool, token_ref: u64) -> Result<(), Error> {
    voter.require_auth();

    let view = storage::snapshot(env);
    resolve_token(&view, token_ref).ok_or(Error::NotRegistered)?;
    if !token::holds_frozen_seat(&view, voter) {
        return Err(Error::NotRegistered);
    }
    let mut record = view.member(voter).ok_or(Error::NotRegistered)?;

    if record.has_voted {
        return Err(Error::AlreadyVoted);
    }

    if let Some(deadline) = view.voting_deadline() {
        if env.ledger().timestamp() >= deadline {
            return Err(Error::VotingClosed);
        }
    }

    let mut tally = view.tally().unwrap_or(VoteTally {
        total: 0,
        in_favor: 0,
    });
    tally.total += 1;
    if in_favor {
        tally.in_favor += 1;
    }
    record.has_voted = true;

    storage::set_member(env, voter, &record);
    storage::set_tally(env, &tally);

    env.events()
        .publish((symbol_short!("vote"), voter.clone()), in_favor);

    Ok(())
}
