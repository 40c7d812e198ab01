use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::errors::Error;
use crate::storage;

/// Authenticates `caller` and checks it is the account that created this
/// instance.
pub fn require_creator(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let creator = storage::snapshot(env).creator()?;
    if *caller != creator {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn update(env: &Env, caller: &Address, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
    require_creator(env, caller)?;
    if !storage::snapshot(env).lifecycle()?.updatable {
        return Err(Error::NotPermitted);
    }

    env.events()
        .publish((symbol_short!("update"), caller.clone()), new_wasm_hash.clone());
    env.deployer().update_current_contract_wasm(new_wasm_hash);
    Ok(())
}

pub fn delete(env: &Env, caller: &Address) -> Result<(), Error> {
    require_creator(env, caller)?;
    if !storage::snapshot(env).lifecycle()?.deletable {
        return Err(Error::NotPermitted);
    }

    storage::teardown(env);
    env.events()
        .publish((symbol_short!("delete"), caller.clone()), ());
    Ok(())
}
