use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::types::{
    AuctionConfig, AuctionState, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// IDENTITIES
// ============================================================================

pub fn get_owner(e: &Env) -> Address {
    // Written by the constructor, always present afterwards.
    e.storage()
        .instance()
        .get(&StorageKey::Owner)
        .unwrap()
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&StorageKey::Owner, owner);
}

pub fn get_payment_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&StorageKey::PaymentToken)
        .unwrap()
}

pub fn set_payment_token(e: &Env, token: &Address) {
    e.storage().instance().set(&StorageKey::PaymentToken, token);
}

/// Asset ledger reference, absent until `setup`
pub fn get_asset_ledger(e: &Env) -> Option<Address> {
    e.storage().instance().get(&StorageKey::AssetLedger)
}

pub fn set_asset_ledger(e: &Env, ledger: &Address) {
    e.storage().instance().set(&StorageKey::AssetLedger, ledger);
}

// ============================================================================
// CONFIG & STATE
// ============================================================================

pub fn get_config(e: &Env) -> Result<AuctionConfig, Error> {
    e.storage()
        .instance()
        .get(&StorageKey::Config)
        .ok_or(Error::InvalidConfiguration)
}

pub fn set_config(e: &Env, config: &AuctionConfig) {
    e.storage().instance().set(&StorageKey::Config, config);
}

pub fn get_state(e: &Env) -> AuctionState {
    e.storage()
        .instance()
        .get(&StorageKey::State)
        .unwrap_or_else(AuctionState::new)
}

pub fn set_state(e: &Env, state: &AuctionState) {
    e.storage().instance().set(&StorageKey::State, state);
}

// ============================================================================
// BID LEDGER
// ============================================================================

/// Committed amount for a bidder, zero if none
pub fn get_bid(e: &Env, bidder: &Address) -> u128 {
    let key = StorageKey::Bid(bidder.clone());
    let amount = e.storage().persistent().get::<_, u128>(&key);
    if amount.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    amount.unwrap_or(0)
}

/// Write a bidder's committed amount. Zeroed entries stay in place.
pub fn set_bid(e: &Env, bidder: &Address, amount: u128) {
    let key = StorageKey::Bid(bidder.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// TTL
// ============================================================================

/// Extend the TTL of instance storage.
/// Called during state-changing operations.
pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}
