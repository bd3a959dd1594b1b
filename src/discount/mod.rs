//! Discount policies and the conditions under which they apply.
//!
//! A discount applies only when the buyer is a VIP member and the purchase
//! price meets [`DISCOUNT_PRICE_THRESHOLD`]. Which discount is taken off is
//! decided by the active [`DiscountPolicy`], chosen once when the order
//! service is built.

use std::str::FromStr;

use crate::domain::Grade;
use crate::error::ConfigError;

/// Minimum purchase amount for any discount to apply (inclusive).
pub const DISCOUNT_PRICE_THRESHOLD: u64 = 10_000;

/// Flat amount taken off by the fixed policy.
pub const FIXED_DISCOUNT_AMOUNT: u64 = 1_000;

/// Percentage taken off by the rate policy.
pub const RATE_DISCOUNT_PERCENT: u64 = 10;

/// The discount strategies the system can run with.
///
/// Exactly one policy is active at a time. The set is closed, so the
/// strategies live in one enum rather than behind a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountPolicy {
    /// Flat discount of [`FIXED_DISCOUNT_AMOUNT`] when eligible.
    Fixed,
    /// [`RATE_DISCOUNT_PERCENT`] percent off (rounded down) when eligible.
    Rate,
}

impl DiscountPolicy {
    /// Discount for a purchase of `price` by a member of `grade`.
    ///
    /// Only VIP members buying for at least [`DISCOUNT_PRICE_THRESHOLD`]
    /// are eligible; every other combination gets 0. Pure function, no
    /// side effects.
    pub fn discount_amount(&self, grade: Grade, price: u64) -> u64 {
        if grade != Grade::Vip || price < DISCOUNT_PRICE_THRESHOLD {
            return 0;
        }
        match self {
            DiscountPolicy::Fixed => FIXED_DISCOUNT_AMOUNT,
            DiscountPolicy::Rate => price * RATE_DISCOUNT_PERCENT / 100,
        }
    }
}

impl FromStr for DiscountPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(DiscountPolicy::Fixed),
            "rate" => Ok(DiscountPolicy::Rate),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}
