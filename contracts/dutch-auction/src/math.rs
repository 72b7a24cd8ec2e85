//! Checked integer primitives. Nothing in the auction wraps silently.

use crate::errors::Error;

pub fn add(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_add(b).ok_or(Error::ArithmeticOverflow)
}

pub fn sub(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_sub(b).ok_or(Error::ArithmeticOverflow)
}

pub fn mul(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_mul(b).ok_or(Error::ArithmeticOverflow)
}

/// Truncating division. A zero divisor is an error, not a trap.
pub fn div(a: u128, b: u128) -> Result<u128, Error> {
    a.checked_div(b).ok_or(Error::ArithmeticOverflow)
}

/// `a * b / c`, multiplying first.
pub fn mul_div(a: u128, b: u128, c: u128) -> Result<u128, Error> {
    div(mul(a, b)?, c)
}

/// `max(0, a - b)`
pub fn sub_or_zero(a: u128, b: u128) -> u128 {
    max(a, b) - b
}

pub fn min(a: u128, b: u128) -> u128 {
    if a < b {
        a
    } else {
        b
    }
}

pub fn max(a: u128, b: u128) -> u128 {
    if a > b {
        a
    } else {
        b
    }
}

pub fn pow10(exp: u32) -> Result<u128, Error> {
    10u128.checked_pow(exp).ok_or(Error::ArithmeticOverflow)
}

/// Number of decimal digits in `n`. Zero has one digit.
pub fn count_digits(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Convert an engine amount into a token-interface amount.
pub fn to_token_amount(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)
}

/// Convert a token-interface amount into an engine amount. Negative values are rejected.
pub fn from_token_amount(amount: i128) -> Result<u128, Error> {
    u128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)
}
