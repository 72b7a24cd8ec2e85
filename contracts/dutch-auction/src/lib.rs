#![no_std]

mod admin;
mod bidding;
mod claims;
mod errors;
mod events;
mod math;
mod price;
mod stage;
mod storage;
mod transfers;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, panic_with_error, vec, Address, Env, Vec};

pub use crate::errors::Error;
pub use crate::transfers::{AssetLedgerClient, AssetLedgerInterface};
pub use crate::types::{AuctionConfig, AuctionState, Stage};

use crate::events::*;

// ============================================================================
// Contract
// ============================================================================

/// Descending-price token auction.
///
/// Sells the asset ledger's entire deposit with the auction for a payment
/// token. The price per display unit falls with time until the collected
/// value exactly covers the supply at that price; the price is then frozen
/// and every bidder claims `bid * multiplier / final_price` subunits, less
/// the owner fraction. Once every bid is claimed the collected reserve is
/// handed to the asset ledger.
///
/// Lifecycle: `Deployed → SetUp → Started → Ended → Distributed → TradingStarted`.
#[contract]
pub struct DutchAuction;

#[contractimpl]
impl DutchAuction {
    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Construct the auction.
    ///
    /// # Arguments
    /// * `owner` - Address allowed to drive setup and receiving the owner share
    /// * `payment_token` - Token contract carrying bid value
    /// * `price_factor`, `price_const` - Price curve parameters, both nonzero
    /// * `owner_fr`, `owner_fr_dec` - Owner fraction `owner_fr / 10^owner_fr_dec`
    pub fn __constructor(
        e: &Env,
        owner: Address,
        payment_token: Address,
        price_factor: u128,
        price_const: u128,
        owner_fr: u128,
        owner_fr_dec: u32,
    ) {
        if let Err(err) = price::validate_settings(price_factor, price_const, owner_fr, owner_fr_dec)
        {
            panic_with_error!(e, err);
        }

        storage::set_owner(e, &owner);
        storage::set_payment_token(e, &payment_token);
        storage::set_config(
            e,
            &AuctionConfig {
                price_factor,
                price_const,
                owner_fr,
                owner_fr_dec,
                tokens_auctioned: 0,
                subunit_multiplier: 0,
            },
        );
        storage::set_state(e, &AuctionState::new());
        storage::extend_instance_ttl(e);

        DeployedEventData {
            price_factor,
            price_const,
            owner_fr,
            owner_fr_dec,
        }
        .publish(e);
    }

    /// Attach the asset ledger and read the supply deposited with the auction.
    ///
    /// # Errors
    /// * `Error::InvalidStage` - If not in `Deployed`
    /// * `Error::Unauthorized` - If `owner` is not the auction owner
    /// * `Error::ZeroIdentity` - If `asset_ledger` is the auction itself
    /// * `Error::InvalidConfiguration` - If no supply was deposited
    pub fn setup(e: &Env, owner: Address, asset_ledger: Address) -> Result<(), Error> {
        let mut state = stage::require_stage(e, Stage::Deployed)?;
        admin::require_owner(e, &owner)?;
        admin::require_external(e, &asset_ledger)?;

        let (tokens_auctioned, decimals) = transfers::read_asset_supply(e, &asset_ledger)?;
        if tokens_auctioned == 0 {
            return Err(Error::InvalidConfiguration);
        }
        let subunit_multiplier =
            math::pow10(decimals).map_err(|_| Error::InvalidConfiguration)?;

        let mut config = storage::get_config(e)?;
        config.tokens_auctioned = tokens_auctioned;
        config.subunit_multiplier = subunit_multiplier;

        stage::advance(e, &mut state, Stage::SetUp)?;

        storage::set_asset_ledger(e, &asset_ledger);
        storage::set_config(e, &config);
        storage::set_state(e, &state);
        storage::extend_instance_ttl(e);

        SetupEventData {
            asset_ledger,
            tokens_auctioned,
            subunit_multiplier,
        }
        .publish(e);

        Ok(())
    }

    /// Revise the price settings (owner only, `SetUp` only).
    ///
    /// # Errors
    /// * `Error::InvalidConfiguration` - If a value is zero or `owner_fr` has
    ///   more digits than `owner_fr_dec`
    pub fn change_settings(
        e: &Env,
        owner: Address,
        price_factor: u128,
        price_const: u128,
        owner_fr: u128,
        owner_fr_dec: u32,
    ) -> Result<(), Error> {
        stage::require_stage(e, Stage::SetUp)?;
        admin::require_owner(e, &owner)?;
        price::validate_settings(price_factor, price_const, owner_fr, owner_fr_dec)?;

        let mut config = storage::get_config(e)?;
        config.price_factor = price_factor;
        config.price_const = price_const;
        config.owner_fr = owner_fr;
        config.owner_fr_dec = owner_fr_dec;
        storage::set_config(e, &config);
        storage::extend_instance_ttl(e);

        SettingsChangedEventData {
            price_factor,
            price_const,
            owner_fr,
            owner_fr_dec,
        }
        .publish(e);

        Ok(())
    }

    /// Open bidding (owner only). The price starts decaying from now.
    pub fn start_auction(e: &Env, owner: Address) -> Result<(), Error> {
        let mut state = stage::require_stage(e, Stage::SetUp)?;
        admin::require_owner(e, &owner)?;

        state.start_time = e.ledger().timestamp();
        state.start_height = e.ledger().sequence();
        stage::advance(e, &mut state, Stage::Started)?;

        storage::set_state(e, &state);
        storage::extend_instance_ttl(e);

        AuctionStartedEventData {
            start_time: state.start_time,
            start_height: state.start_height,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // BIDDING
    // ========================================================================

    /// Bid `amount` of payment token. `receiver` (default `sender`) is
    /// credited; any part above the missing reserve is refunded to `sender`.
    ///
    /// Returns the accepted amount.
    ///
    /// # Errors
    /// * `Error::InvalidStage` - If bidding is not open
    /// * `Error::ZeroOrInvalidBid` - If `amount` is not positive
    /// * `Error::ZeroIdentity` - If `receiver` is the auction itself
    /// * `Error::TransferFailure` - If the payment cannot be collected
    pub fn bid(
        e: &Env,
        sender: Address,
        amount: i128,
        receiver: Option<Address>,
    ) -> Result<u128, Error> {
        bidding::place_bid(e, sender, amount, receiver)
    }

    // ========================================================================
    // SETTLEMENT
    // ========================================================================

    /// Claim the issued asset for `receiver` (default `caller`).
    pub fn claim_tokens(e: &Env, caller: Address, receiver: Option<Address>) -> Result<(), Error> {
        caller.require_auth();
        let receiver = receiver.unwrap_or(caller);
        claims::claim_batch(e, vec![e, receiver])
    }

    /// Claim the issued asset for several bidders at once. May be repeated
    /// with overlapping lists; already-claimed bidders are skipped.
    pub fn claim_tokens_batch(e: &Env, receivers: Vec<Address>) -> Result<(), Error> {
        claims::claim_batch(e, receivers)
    }

    // ========================================================================
    // PRICE QUERIES
    // ========================================================================

    /// Current price of one display unit; the frozen clearing price once ended.
    pub fn price(e: &Env) -> Result<u128, Error> {
        let config = storage::get_config(e)?;
        let state = storage::get_state(e);
        price::current_price(e, &config, &state)
    }

    /// Reserve that would subscribe the whole supply at the current price.
    pub fn reserve_at_price(e: &Env) -> Result<u128, Error> {
        let config = storage::get_config(e)?;
        let state = storage::get_state(e);
        price::reserve_at(&config, price::current_price(e, &config, &state)?)
    }

    /// Value still needed to end the auction at the current price.
    ///
    /// `reserve` defaults to the payment token currently held by the auction.
    pub fn missing_reserve_to_end_auction(e: &Env, reserve: Option<u128>) -> Result<u128, Error> {
        let config = storage::get_config(e)?;
        let state = storage::get_state(e);
        let reserve = match reserve {
            Some(reserve) => reserve,
            None => transfers::held_balance(e, &storage::get_payment_token(e))?,
        };
        price::missing_reserve(&config, price::current_price(e, &config, &state)?, reserve)
    }

    /// Owner's cut of `supply` asset subunits.
    pub fn owner_fraction(e: &Env, supply: u128) -> Result<u128, Error> {
        let config = storage::get_config(e)?;
        price::owner_fraction(&config, supply)
    }

    // ========================================================================
    // STATE QUERIES
    // ========================================================================

    pub fn stage(e: &Env) -> Stage {
        storage::get_state(e).stage
    }

    pub fn get_config(e: &Env) -> Result<AuctionConfig, Error> {
        storage::get_config(e)
    }

    pub fn get_state(e: &Env) -> AuctionState {
        storage::get_state(e)
    }

    /// Unclaimed committed amount of `bidder`
    pub fn bid_of(e: &Env, bidder: Address) -> u128 {
        storage::get_bid(e, &bidder)
    }

    /// Collected value not yet claimed: `total_collected - funds_claimed`
    pub fn outstanding_bids(e: &Env) -> Result<u128, Error> {
        let state = storage::get_state(e);
        math::sub(state.total_collected, state.funds_claimed)
    }

    pub fn owner(e: &Env) -> Address {
        storage::get_owner(e)
    }

    pub fn payment_token(e: &Env) -> Address {
        storage::get_payment_token(e)
    }

    pub fn asset_ledger(e: &Env) -> Option<Address> {
        storage::get_asset_ledger(e)
    }
}
