use crate::errors::Error;
use crate::storage;
use soroban_sdk::{Address, Env};

/// Authenticate `owner` and check it is the auction owner.
pub fn require_owner(e: &Env, owner: &Address) -> Result<(), Error> {
    owner.require_auth();
    if storage::get_owner(e) != *owner {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Reject identities that cannot hold value on their own behalf.
pub fn require_external(e: &Env, who: &Address) -> Result<(), Error> {
    if *who == e.current_contract_address() {
        return Err(Error::ZeroIdentity);
    }
    Ok(())
}
