use soroban_sdk::{log, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::{AuctionState, Stage};

/// Load the auction state, failing unless it is in `expected`.
pub fn require_stage(e: &Env, expected: Stage) -> Result<AuctionState, Error> {
    let state = storage::get_state(e);
    if state.stage != expected {
        return Err(Error::InvalidStage);
    }
    Ok(state)
}

/// Move `state` to `to`. Only the immediate successor is accepted.
pub fn advance(e: &Env, state: &mut AuctionState, to: Stage) -> Result<(), Error> {
    if state.stage.next() != Some(to) {
        return Err(Error::InvalidStage);
    }
    log!(e, "stage transition", state.stage.as_u32(), to.as_u32());
    state.stage = to;
    Ok(())
}
