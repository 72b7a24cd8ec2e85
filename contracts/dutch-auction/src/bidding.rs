use soroban_sdk::{log, Address, Env};

use crate::admin;
use crate::errors::Error;
use crate::events::{AuctionEndedEventData, BidSubmissionEventData};
use crate::math;
use crate::price;
use crate::stage;
use crate::storage;
use crate::transfers;
use crate::types::{AuctionConfig, AuctionState, Stage};

/// Admit a bid of `amount` payment token from `sender`, credited to `receiver`.
///
/// The bid is clamped to the reserve still missing at the current price,
/// measured against the auction's balance before this payment arrives. The
/// excess goes back to `sender`. A bid that exactly fills the missing reserve
/// ends the auction and freezes the price.
///
/// Returns the accepted amount.
pub fn place_bid(
    e: &Env,
    sender: Address,
    amount: i128,
    receiver: Option<Address>,
) -> Result<u128, Error> {
    sender.require_auth();

    let mut state = stage::require_stage(e, Stage::Started)?;

    if amount <= 0 {
        return Err(Error::ZeroOrInvalidBid);
    }
    let offered = math::from_token_amount(amount)?;

    let receiver = receiver.unwrap_or_else(|| sender.clone());
    admin::require_external(e, &receiver)?;

    let config = storage::get_config(e)?;
    let payment_token = storage::get_payment_token(e);

    let balance_before = transfers::held_balance(e, &payment_token)?;
    let current_price = price::current_price(e, &config, &state)?;
    let max_accepted = price::missing_reserve(&config, current_price, balance_before)?;

    let accepted = math::min(offered, max_accepted);
    let refunded = math::sub(offered, accepted)?;
    let committed = math::add(storage::get_bid(e, &receiver), accepted)?;
    let total_collected = math::add(state.total_collected, accepted)?;

    // All owned state is written before any value moves.
    if accepted > 0 {
        storage::set_bid(e, &receiver, committed);
    }
    state.total_collected = total_collected;

    let final_price = if accepted == max_accepted {
        Some(finalize(e, &config, &mut state)?)
    } else {
        None
    };

    storage::set_state(e, &state);
    storage::extend_instance_ttl(e);

    log!(e, "bid admitted", receiver.clone(), accepted, refunded);

    BidSubmissionEventData {
        bidder: receiver,
        accepted,
        refunded,
        missing_reserve_before: max_accepted,
    }
    .publish(e);

    if let Some(final_price) = final_price {
        AuctionEndedEventData { final_price }.publish(e);
    }

    transfers::collect_payment(e, &payment_token, &sender, amount)?;
    transfers::send_payment(e, &payment_token, &sender, refunded)?;

    Ok(accepted)
}

/// Freeze the price at the current elapsed time and end the auction.
///
/// Only mutates `state`; the caller persists it.
fn finalize(e: &Env, config: &AuctionConfig, state: &mut AuctionState) -> Result<u128, Error> {
    if state.stage != Stage::Started {
        return Err(Error::InvalidStage);
    }
    let final_price = price::price_at(config, price::elapsed(e, state))?;

    state.final_price = Some(final_price);
    state.end_time = e.ledger().timestamp();
    stage::advance(e, state, Stage::Ended)?;

    log!(e, "auction finalized", final_price);
    Ok(final_price)
}
