use soroban_sdk::contracterror;

/// Error codes for the descending-price auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Operation is not permitted in the current auction stage
    InvalidStage = 1,
    /// Caller is not the auction owner
    Unauthorized = 2,
    /// Identity cannot hold or receive value (the auction itself)
    ZeroIdentity = 3,
    /// Checked arithmetic overflowed or underflowed
    ArithmeticOverflow = 4,
    /// Bid amount is zero or negative
    ZeroOrInvalidBid = 5,
    /// An outward token or asset call failed
    TransferFailure = 6,
    /// Price settings or collaborator values are unusable
    InvalidConfiguration = 7,
}
