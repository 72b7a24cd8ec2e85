
use crate::{DutchAuction, DutchAuctionClient};
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Events, Ledger, LedgerInfo},
    token, Address, Env, Event, Val, Vec,
};

pub const PRICE_FACTOR: u128 = 1000;
pub const PRICE_CONST: u128 = 1;
pub const OWNER_FR: u128 = 15;
pub const OWNER_FR_DEC: u32 = 2;
pub const DECIMALS: u32 = 7;
pub const MULTIPLIER: u128 = 10_000_000;
pub const SUPPLY: u128 = 1000 * MULTIPLIER;
pub const START_TIME: u64 = 1000;
pub const BIDDER_FUNDS: i128 = 100_000_000_000_000;

// ============================================================================
// MOCK ASSET LEDGERS
// ============================================================================

#[contracttype]
#[derive(Clone)]
pub enum MockKey {
    Decimals,
    Balance(Address),
    Reserve,
    Target,
}

/// Minimal issued-asset ledger.
#[contract]
pub struct MockAssetLedger;

#[contractimpl]
impl MockAssetLedger {
    pub fn __constructor(e: &Env, decimals: u32) {
        e.storage().instance().set(&MockKey::Decimals, &decimals);
    }

    pub fn mint(e: &Env, to: Address, amount: i128) {
        let balance = Self::balance(e, to.clone());
        e.storage()
            .persistent()
            .set(&MockKey::Balance(to), &(balance + amount));
    }

    pub fn balance(e: &Env, id: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&MockKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn decimals(e: &Env) -> u32 {
        e.storage().instance().get(&MockKey::Decimals).unwrap()
    }

    pub fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let from_balance = Self::balance(e, from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        e.storage()
            .persistent()
            .set(&MockKey::Balance(from), &(from_balance - amount));
        Self::mint(e, to, amount);
    }

    pub fn receive_reserve(e: &Env, amount: i128) {
        let total = Self::reserve(e) + amount;
        e.storage().instance().set(&MockKey::Reserve, &total);
    }

    pub fn reserve(e: &Env) -> i128 {
        e.storage().instance().get(&MockKey::Reserve).unwrap_or(0)
    }
}

/// Asset ledger that calls back into the auction while issuing.
#[contract]
pub struct ReentrantAssetLedger;

#[contractimpl]
impl ReentrantAssetLedger {
    pub fn __constructor(e: &Env, decimals: u32) {
        e.storage().instance().set(&MockKey::Decimals, &decimals);
    }

    pub fn set_target(e: &Env, auction: Address) {
        e.storage().instance().set(&MockKey::Target, &auction);
    }

    pub fn mint(e: &Env, to: Address, amount: i128) {
        e.storage().persistent().set(&MockKey::Balance(to), &amount);
    }

    pub fn balance(e: &Env, id: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&MockKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn decimals(e: &Env) -> u32 {
        e.storage().instance().get(&MockKey::Decimals).unwrap()
    }

    pub fn transfer(e: &Env, _from: Address, to: Address, _amount: i128) {
        let auction: Address = e.storage().instance().get(&MockKey::Target).unwrap();
        let mut receivers = Vec::new(e);
        receivers.push_back(to);
        DutchAuctionClient::new(e, &auction).claim_tokens_batch(&receivers);
    }

    pub fn receive_reserve(_e: &Env, _amount: i128) {}
}

// ============================================================================
// SETUP
// ============================================================================

pub struct TestContext {
    pub env: Env,
    pub client: DutchAuctionClient<'static>,
    pub auction: Address,
    pub owner: Address,
    pub payment: token::TokenClient<'static>,
    pub payment_admin: token::StellarAssetClient<'static>,
    pub ledger: MockAssetLedgerClient<'static>,
}

impl TestContext {
    pub fn bidder(&self) -> Address {
        let bidder = Address::generate(&self.env);
        self.payment_admin.mint(&bidder, &BIDDER_FUNDS);
        bidder
    }

    /// Move the clock to `seconds` after the auction start.
    pub fn at_elapsed(&self, seconds: u64) {
        set_timestamp(&self.env, START_TIME + seconds);
    }

    pub fn sum_of_bids(&self, bidders: &[&Address]) -> u128 {
        bidders.iter().map(|b| self.client.bid_of(b)).sum()
    }

    /// Events the auction published during the last invocation.
    pub fn auction_events(&self) -> Vec<(Address, Vec<Val>, Val)> {
        let mut events = Vec::new(&self.env);
        for event in self.env.events().all().iter() {
            if event.0 == self.auction {
                events.push_back(event);
            }
        }
        events
    }

    /// `event` in the form the auction publishes it.
    pub fn published(&self, event: &impl Event) -> (Address, Vec<Val>, Val) {
        (
            self.auction.clone(),
            event.topics(&self.env),
            event.data(&self.env),
        )
    }
}

pub fn set_timestamp(env: &Env, timestamp: u64) {
    env.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 1000000,
    });
}

/// Auction constructed with the default settings, nothing attached yet.
pub fn deploy() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START_TIME);

    let owner = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let payment = token::TokenClient::new(&env, &token_contract.address());
    let payment_admin = token::StellarAssetClient::new(&env, &token_contract.address());

    let auction = env.register(
        DutchAuction,
        (
            owner.clone(),
            token_contract.address(),
            PRICE_FACTOR,
            PRICE_CONST,
            OWNER_FR,
            OWNER_FR_DEC,
        ),
    );
    let client = DutchAuctionClient::new(&env, &auction);

    let ledger_id = env.register(MockAssetLedger, (DECIMALS,));
    let ledger = MockAssetLedgerClient::new(&env, &ledger_id);
    ledger.mint(&auction, &(SUPPLY as i128));

    TestContext {
        env,
        client,
        auction,
        owner,
        payment,
        payment_admin,
        ledger,
    }
}

/// Auction attached to its asset ledger, in `SetUp`.
pub fn setup_auction() -> TestContext {
    let ctx = deploy();
    ctx.client.setup(&ctx.owner, &ctx.ledger.address);
    ctx
}

/// Auction with bidding open at `START_TIME`.
pub fn start_auction() -> TestContext {
    let ctx = setup_auction();
    ctx.client.start_auction(&ctx.owner);
    ctx
}
