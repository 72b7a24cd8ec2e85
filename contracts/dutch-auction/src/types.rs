use soroban_sdk::{contracttype, Address};

// ============================================================================
// TTL CONSTANTS
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for bid entries (30 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending bid entries (29 days)
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Storage keys for the auction contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Auction owner, receives the owner share of every claim
    Owner,
    /// Token contract carrying bid value
    PaymentToken,
    /// Issued-asset ledger, set by `setup`
    AssetLedger,
    /// Pricing and supply parameters
    Config,
    /// Lifecycle and accounting state
    State,
    /// Committed bid amount by bidder
    Bid(Address),
}

/// Auction lifecycle. Stages only ever move forward, one step at a time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Stage {
    /// Contract constructed, no asset ledger yet
    Deployed = 0,
    /// Asset ledger attached, settings may still change
    SetUp = 1,
    /// Bidding window open, price decaying
    Started = 2,
    /// Supply fully subscribed, price frozen, claims open
    Ended = 3,
    /// Every committed bid has been claimed
    Distributed = 4,
    /// Reserve handed to the asset ledger
    TradingStarted = 5,
}

impl Stage {
    /// The single stage this one may advance to.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Deployed => Some(Stage::SetUp),
            Stage::SetUp => Some(Stage::Started),
            Stage::Started => Some(Stage::Ended),
            Stage::Ended => Some(Stage::Distributed),
            Stage::Distributed => Some(Stage::TradingStarted),
            Stage::TradingStarted => None,
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    /// Whether the clearing price has been frozen.
    pub fn is_price_frozen(&self) -> bool {
        *self >= Stage::Ended
    }
}

/// Pricing and supply parameters.
///
/// The four price settings are fixed at deployment and may be revised only
/// while the auction is in `SetUp`. `tokens_auctioned` and
/// `subunit_multiplier` are read from the asset ledger by `setup`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    pub price_factor: u128,
    pub price_const: u128,
    /// Owner fraction numerator
    pub owner_fr: u128,
    /// Owner fraction denominator, as a power of ten
    pub owner_fr_dec: u32,
    /// Supply being sold, in asset subunits
    pub tokens_auctioned: u128,
    /// 10^decimals of the issued asset
    pub subunit_multiplier: u128,
}

/// Lifecycle and accounting state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    pub stage: Stage,
    pub start_time: u64,
    pub start_height: u32,
    pub end_time: u64,
    pub final_price: Option<u128>,
    /// Bid value already converted into issued asset
    pub funds_claimed: u128,
    /// Sum of every accepted bid
    pub total_collected: u128,
}

impl AuctionState {
    pub fn new() -> Self {
        AuctionState {
            stage: Stage::Deployed,
            start_time: 0,
            start_height: 0,
            end_time: 0,
            final_price: None,
            funds_claimed: 0,
            total_collected: 0,
        }
    }
}

/// Issued-asset split produced by a single claim.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Allocation {
    pub bid_amount: u128,
    pub num: u128,
    pub owner_share: u128,
    pub recipient_share: u128,
}
