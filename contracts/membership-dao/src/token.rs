//! In-contract ledger for the membership token.
//!
//! The application keeps the unissued units as `reserve`; every other unit sits
//! in exactly one account `Holding`. Seating moves one unit out of the reserve
//! and freezes it, unseating reverses both steps.

use soroban_sdk::{symbol_short, xdr::ToXdr, Address, Bytes, Env};

use crate::constants::{MEMBERSHIP_DECIMALS, MEMBERSHIP_TOTAL_SUPPLY, SEAT_UNITS, TOKEN_ID_DOMAIN};
use crate::errors::Error;
use crate::storage::{self, Snapshot};
use crate::types::{Holding, MembershipToken};

/// Mints the full supply into the application reserve, with the contract as
/// freeze authority.
pub fn issue(env: &Env) -> MembershipToken {
    let authority = env.current_contract_address();
    let token = MembershipToken {
        id: derive_token_id(env, &authority),
        total_supply: MEMBERSHIP_TOTAL_SUPPLY,
        decimals: MEMBERSHIP_DECIMALS,
        reserve: MEMBERSHIP_TOTAL_SUPPLY,
        freeze_authority: authority,
    };
    storage::set_membership_token(env, &token);

    env.events().publish(
        (symbol_short!("issue"), token.freeze_authority.clone()),
        (token.id, token.total_supply),
    );

    token
}

fn derive_token_id(env: &Env, authority: &Address) -> u64 {
    let mut preimage = Bytes::from_slice(env, TOKEN_ID_DOMAIN);
    preimage.append(&authority.clone().to_xdr(env));
    let digest = env.crypto().sha256(&preimage).to_array();

    let mut id = [0u8; 8];
    id.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(id)
}

pub fn opt_in(env: &Env, account: &Address) -> Result<(), Error> {
    let view = storage::snapshot(env);
    view.membership_token().ok_or(Error::NotBootstrapped)?;
    if view.holding(account).is_some() {
        return Err(Error::AlreadyOptedIn);
    }

    storage::set_holding(
        env,
        account,
        &Holding {
            balance: 0,
            frozen: false,
        },
    );

    env.events()
        .publish((symbol_short!("opt_in"), account.clone()), ());

    Ok(())
}

/// Holder-initiated transfer. Frozen holdings can neither send nor receive.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: u64) -> Result<(), Error> {
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }

    let view = storage::snapshot(env);
    let mut from_holding = view.holding(from).ok_or(Error::HoldingNotFound)?;
    let mut to_holding = view.holding(to).ok_or(Error::HoldingNotFound)?;

    if from_holding.frozen || to_holding.frozen {
        return Err(Error::HoldingFrozen);
    }
    if from_holding.balance < amount {
        return Err(Error::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }

    from_holding.balance -= amount;
    to_holding.balance += amount;
    storage::set_holding(env, from, &from_holding);
    storage::set_holding(env, to, &to_holding);

    env.events().publish(
        (symbol_short!("transfer"), from.clone()),
        (to.clone(), amount),
    );

    Ok(())
}

/// Moves one unit from the reserve to `holder` and freezes the holding.
/// Both checks run before either write.
pub fn seat(env: &Env, token: &mut MembershipToken, holder: &Address) -> Result<(), Error> {
    let mut holding = storage::snapshot(env)
        .holding(holder)
        .ok_or(Error::HoldingNotFound)?;
    if token.reserve < SEAT_UNITS {
        return Err(Error::InsufficientBalance);
    }

    token.reserve -= SEAT_UNITS;
    holding.balance += SEAT_UNITS;
    holding.frozen = true;

    storage::set_membership_token(env, token);
    storage::set_holding(env, holder, &holding);
    Ok(())
}

/// Unfreezes `holder` and claws its seat back into the reserve.
pub fn unseat(env: &Env, token: &mut MembershipToken, holder: &Address) -> Result<(), Error> {
    let mut holding = storage::snapshot(env)
        .holding(holder)
        .ok_or(Error::HoldingNotFound)?;
    if holding.balance < SEAT_UNITS {
        return Err(Error::InsufficientBalance);
    }

    holding.frozen = false;
    holding.balance -= SEAT_UNITS;
    token.reserve += SEAT_UNITS;

    storage::set_holding(env, holder, &holding);
    storage::set_membership_token(env, token);
    Ok(())
}

// ── Queries ──────────────────────────────────────────────────────────────────

pub fn balance(view: &Snapshot, account: &Address) -> Result<u64, Error> {
    view.holding(account)
        .map(|holding| holding.balance)
        .ok_or(Error::HoldingNotFound)
}

pub fn is_frozen(view: &Snapshot, account: &Address) -> bool {
    view.holding(account).map_or(false, |holding| holding.frozen)
}

/// True when `account` holds exactly one seat and it is frozen.
pub fn holds_frozen_seat(view: &Snapshot, account: &Address) -> bool {
    matches!(
        view.holding(account),
        Some(Holding { balance: SEAT_UNITS, frozen: true })
    )
}
