use soroban_sdk::{contractevent, Address};

/// Event emitted when the auction contract is constructed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeployedEventData {
    pub price_factor: u128,
    pub price_const: u128,
    pub owner_fr: u128,
    pub owner_fr_dec: u32,
}

/// Event emitted when the asset ledger is attached
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetupEventData {
    #[topic]
    pub asset_ledger: Address,
    pub tokens_auctioned: u128,
    pub subunit_multiplier: u128,
}

/// Event emitted when price settings are revised
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettingsChangedEventData {
    pub price_factor: u128,
    pub price_const: u128,
    pub owner_fr: u128,
    pub owner_fr_dec: u32,
}

/// Event emitted when bidding opens
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    pub start_time: u64,
    pub start_height: u32,
}

/// Event emitted for every admitted bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidSubmissionEventData {
    #[topic]
    pub bidder: Address,
    pub accepted: u128,
    pub refunded: u128,
    pub missing_reserve_before: u128,
}

/// Event emitted when a bid is converted into issued asset
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedTokensEventData {
    #[topic]
    pub recipient: Address,
    pub bid_amount: u128,
    pub num: u128,
    pub recipient_share: u128,
    pub owner_share: u128,
}

/// Event emitted when the clearing price is frozen
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    pub final_price: u128,
}

/// Event emitted once every committed bid has been claimed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensDistributedEventData {
    pub funds_claimed: u128,
}

/// Event emitted when the reserve reaches the asset ledger
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TradingStartedEventData {
    pub reserve: u128,
}
