//! Fixed-point price and integer quantity types
//!
//! Prices are held as an integer number of ticks so that equality and
//! ordering are exact. `Decimal` appears only at the boundary: parsing,
//! serialization and analytics. Conversions round half away from zero
//! onto the tick grid.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::NumericError;

/// Number of decimal places carried by a price. One tick = 10^-PRICE_DECIMALS.
pub const PRICE_DECIMALS: u32 = 4;

/// Ticks per whole price unit.
pub const TICKS_PER_UNIT: i64 = 10_000;

/// Price as a fixed-point number of ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Create a price directly from ticks
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Create a price from a whole number of units
    ///
    /// # Panics
    /// Panics if the value does not fit the tick range
    pub fn from_u64(units: u64) -> Self {
        let ticks = i64::try_from(units)
            .ok()
            .and_then(|u| u.checked_mul(TICKS_PER_UNIT))
            .expect("Price out of range");
        Self(ticks)
    }

    /// Convert a decimal onto the tick grid
    pub fn try_from_decimal(value: Decimal) -> Result<Self, NumericError> {
        value
            .round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::from(TICKS_PER_UNIT))
            .and_then(|ticks| ticks.to_i64())
            .map(Self)
            .ok_or_else(|| NumericError::PriceOutOfRange(value.to_string()))
    }

    pub const fn ticks(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::new(self.0, PRICE_DECIMALS)
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl FromStr for Price {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())
            .map_err(|_| NumericError::InvalidDecimal(s.to_string()))?;
        Self::try_from_decimal(value)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = NumericError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::try_from_decimal(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.as_decimal()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

/// Order quantity in whole units
///
/// Addition saturates at `u64::MAX` so that aggregate volumes over a
/// very large book stay well defined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn saturating_sub(self, other: Quantity) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Quantity {
        Quantity(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        *self = *self + rhs;
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::zero(), Add::add)
    }
}

impl From<u64> for Quantity {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
