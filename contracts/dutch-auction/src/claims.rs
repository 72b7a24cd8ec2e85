use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::Error;
use crate::events::{ClaimedTokensEventData, TokensDistributedEventData, TradingStartedEventData};
use crate::math;
use crate::price;
use crate::stage;
use crate::storage;
use crate::transfers;
use crate::types::{Allocation, AuctionConfig, AuctionState, Stage};

/// Split a committed bid into issued-asset subunits at the clearing price.
pub fn allocate(
    config: &AuctionConfig,
    final_price: u128,
    bid_amount: u128,
) -> Result<Allocation, Error> {
    let num = math::mul_div(bid_amount, config.subunit_multiplier, final_price)?;
    let owner_share = price::owner_fraction(config, num)?;
    let recipient_share = math::sub(num, owner_share)?;

    Ok(Allocation {
        bid_amount,
        num,
        owner_share,
        recipient_share,
    })
}

/// Convert the committed bids of `receivers` into issued asset.
///
/// Recipients with nothing committed, including ones already claimed or
/// listed twice, are skipped. The call that brings `funds_claimed` up to
/// `total_collected` also closes the auction and hands over the reserve.
pub fn claim_batch(e: &Env, receivers: Vec<Address>) -> Result<(), Error> {
    let mut state = stage::require_stage(e, Stage::Ended)?;
    let config = storage::get_config(e)?;
    let final_price = state.final_price.ok_or(Error::InvalidStage)?;
    let asset_ledger = storage::get_asset_ledger(e).ok_or(Error::InvalidStage)?;
    let owner = storage::get_owner(e);

    for receiver in receivers.iter() {
        let bid_amount = storage::get_bid(e, &receiver);
        if bid_amount == 0 {
            continue;
        }

        let allocation = allocate(&config, final_price, bid_amount)?;
        let funds_claimed = math::add(state.funds_claimed, bid_amount)?;

        storage::set_bid(e, &receiver, 0);
        state.funds_claimed = funds_claimed;
        storage::set_state(e, &state);

        log!(e, "tokens claimed", receiver.clone(), allocation.num);

        ClaimedTokensEventData {
            recipient: receiver.clone(),
            bid_amount,
            num: allocation.num,
            recipient_share: allocation.recipient_share,
            owner_share: allocation.owner_share,
        }
        .publish(e);

        transfers::issue_asset(e, &asset_ledger, &owner, allocation.owner_share)?;
        transfers::issue_asset(e, &asset_ledger, &receiver, allocation.recipient_share)?;
    }

    if state.funds_claimed == state.total_collected {
        distribute(e, &mut state, &asset_ledger)?;
    }

    storage::extend_instance_ttl(e);
    Ok(())
}

fn distribute(e: &Env, state: &mut AuctionState, asset_ledger: &Address) -> Result<(), Error> {
    stage::advance(e, state, Stage::Distributed)?;
    storage::set_state(e, state);

    TokensDistributedEventData {
        funds_claimed: state.funds_claimed,
    }
    .publish(e);

    transfer_reserve_to_asset(e, state, asset_ledger)
}

/// Hand the whole payment-token balance to the asset ledger and open trading.
fn transfer_reserve_to_asset(
    e: &Env,
    state: &mut AuctionState,
    asset_ledger: &Address,
) -> Result<(), Error> {
    if state.stage != Stage::Distributed {
        return Err(Error::InvalidStage);
    }

    let payment_token = storage::get_payment_token(e);
    let reserve = transfers::held_balance(e, &payment_token)?;

    stage::advance(e, state, Stage::TradingStarted)?;
    storage::set_state(e, state);

    log!(e, "reserve handed over", reserve);
    TradingStartedEventData { reserve }.publish(e);

    transfers::hand_over_reserve(e, &payment_token, asset_ledger, reserve)
}
