//! Descending price curve.
//!
//! While bidding is open the price of one display unit of the issued asset is
//!
//! ```text
//! price_factor * subunit_multiplier / (elapsed + price_const) + 1
//! ```
//!
//! The product is taken before the division; the clearing amount depends on
//! that truncation order. Once the auction has ended the curve is no longer
//! consulted and the frozen `final_price` is reported instead.

use soroban_sdk::Env;

use crate::errors::Error;
use crate::math;
use crate::types::{AuctionConfig, AuctionState, Stage};

/// Curve value after `elapsed` seconds of bidding.
pub fn price_at(config: &AuctionConfig, elapsed: u64) -> Result<u128, Error> {
    let numerator = math::mul(config.price_factor, config.subunit_multiplier)?;
    let denominator = math::add(elapsed as u128, config.price_const)?;
    math::add(math::div(numerator, denominator)?, 1)
}

/// Seconds since the auction started. Zero before the start, and zero if the
/// clock reads earlier than the recorded start.
pub fn elapsed(e: &Env, state: &AuctionState) -> u64 {
    if state.stage != Stage::Started {
        return 0;
    }
    e.ledger().timestamp().saturating_sub(state.start_time)
}

/// Price reported by the contract in the current stage.
pub fn current_price(e: &Env, config: &AuctionConfig, state: &AuctionState) -> Result<u128, Error> {
    if state.stage.is_price_frozen() {
        return state.final_price.ok_or(Error::InvalidStage);
    }
    price_at(config, elapsed(e, state))
}

/// Reserve that subscribes the whole supply at `price`.
///
/// Undefined until `setup` has read the asset's decimals.
pub fn reserve_at(config: &AuctionConfig, price: u128) -> Result<u128, Error> {
    if config.subunit_multiplier == 0 {
        return Err(Error::InvalidStage);
    }
    math::mul_div(config.tokens_auctioned, price, config.subunit_multiplier)
}

/// Value still needed at `price` on top of `reserve`.
pub fn missing_reserve(config: &AuctionConfig, price: u128, reserve: u128) -> Result<u128, Error> {
    Ok(math::sub_or_zero(reserve_at(config, price)?, reserve))
}

/// Portion of `supply` kept by the owner: `supply * owner_fr / 10^owner_fr_dec`.
pub fn owner_fraction(config: &AuctionConfig, supply: u128) -> Result<u128, Error> {
    math::mul_div(supply, config.owner_fr, math::pow10(config.owner_fr_dec)?)
}

/// Settings accepted by the constructor and `change_settings`.
pub fn validate_settings(
    price_factor: u128,
    price_const: u128,
    owner_fr: u128,
    owner_fr_dec: u32,
) -> Result<(), Error> {
    if price_factor == 0 || price_const == 0 || owner_fr == 0 || owner_fr_dec == 0 {
        return Err(Error::InvalidConfiguration);
    }
    if math::count_digits(owner_fr) > owner_fr_dec {
        return Err(Error::InvalidConfiguration);
    }
    math::pow10(owner_fr_dec).map_err(|_| Error::InvalidConfiguration)?;
    Ok(())
}
