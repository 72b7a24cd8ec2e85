//! Outward calls: the payment token that carries bid value and the asset
//! ledger that issues the auctioned supply. Callers finish their own state
//! writes before reaching anything in here.

use soroban_sdk::{contractclient, token, Address, Env};

use crate::errors::Error;
use crate::math;

/// Interface consumed from the issued-asset ledger.
#[allow(dead_code)]
#[contractclient(name = "AssetLedgerClient")]
pub trait AssetLedgerInterface {
    fn balance(env: Env, id: Address) -> i128;
    fn decimals(env: Env) -> u32;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    /// Accept the auction reserve (already transferred) and open trading
    fn receive_reserve(env: Env, amount: i128);
}

// ============================================================================
// ASSET LEDGER
// ============================================================================

/// Supply held by the auction and the asset's decimals.
pub fn read_asset_supply(e: &Env, ledger: &Address) -> Result<(u128, u32), Error> {
    let client = AssetLedgerClient::new(e, ledger);
    let balance = match client.try_balance(&e.current_contract_address()) {
        Ok(Ok(balance)) => math::from_token_amount(balance)?,
        _ => return Err(Error::TransferFailure),
    };
    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => return Err(Error::TransferFailure),
    };
    Ok((balance, decimals))
}

/// Transfer issued asset from the auction to `to`. Zero amounts are skipped.
pub fn issue_asset(e: &Env, ledger: &Address, to: &Address, amount: u128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let amount = math::to_token_amount(amount)?;
    let client = AssetLedgerClient::new(e, ledger);
    match client.try_transfer(&e.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}

/// Move `amount` of payment token to the asset ledger and notify it.
pub fn hand_over_reserve(
    e: &Env,
    payment_token: &Address,
    ledger: &Address,
    amount: u128,
) -> Result<(), Error> {
    send_payment(e, payment_token, ledger, amount)?;
    let amount = math::to_token_amount(amount)?;
    match AssetLedgerClient::new(e, ledger).try_receive_reserve(&amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}

// ============================================================================
// PAYMENT TOKEN
// ============================================================================

/// Payment token balance currently held by the auction.
pub fn held_balance(e: &Env, payment_token: &Address) -> Result<u128, Error> {
    let client = token::Client::new(e, payment_token);
    match client.try_balance(&e.current_contract_address()) {
        Ok(Ok(balance)) => math::from_token_amount(balance),
        _ => Err(Error::TransferFailure),
    }
}

/// Pull the value attached to a bid from `from`.
pub fn collect_payment(
    e: &Env,
    payment_token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::Client::new(e, payment_token);
    match client.try_transfer(from, &e.current_contract_address(), &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}

/// Send payment token held by the auction to `to`. Zero amounts are skipped.
pub fn send_payment(
    e: &Env,
    payment_token: &Address,
    to: &Address,
    amount: u128,
) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let amount = math::to_token_amount(amount)?;
    let client = token::Client::new(e, payment_token);
    match client.try_transfer(&e.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailure),
    }
}
