//! Read-only accessors. Every function here takes a [`Snapshot`], never the
//! `Env`, so none of them can write.

use soroban_sdk::{Address, String};

use crate::errors::Error;
use crate::storage::Snapshot;
use crate::token;
use crate::types::VoteTally;

pub fn get_proposal(view: &Snapshot) -> Result<String, Error> {
    view.proposal()
}

pub fn get_voting_deadline(view: &Snapshot) -> Result<Option<u64>, Error> {
    view.proposal()?;
    Ok(view.voting_deadline())
}

pub fn get_creator(view: &Snapshot) -> Result<Address, Error> {
    view.creator()
}

pub fn get_registered_membership_token(view: &Snapshot) -> Result<u64, Error> {
    view.membership_token()
        .map(|token| token.id)
        .ok_or(Error::NotBootstrapped)
}

pub fn get_votes(view: &Snapshot) -> Result<VoteTally, Error> {
    view.tally().ok_or(Error::NoVotesYet)
}

pub fn is_registered(view: &Snapshot, account: &Address) -> bool {
    view.member(account).is_some() && token::holds_frozen_seat(view, account)
}

pub fn has_voted(view: &Snapshot, account: &Address) -> bool {
    view.member(account).map_or(false, |record| record.has_voted)
}

pub fn membership_total_supply(view: &Snapshot) -> Result<u64, Error> {
    view.membership_token()
        .map(|token| token.total_supply)
        .ok_or(Error::NotBootstrapped)
}

pub fn membership_reserve(view: &Snapshot) -> Result<u64, Error> {
    view.membership_token()
        .map(|token| token.reserve)
        .ok_or(Error::NotBootstrapped)
}
