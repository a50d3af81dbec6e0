//! Trade execution records
//!
//! A trade is immutable once appended to a book's trade log.

use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One execution between a buy and a sell order
///
/// `price` is always the resting order's price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub sequence: u64, // Per-book monotonic sequence
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub price: Price,
    pub quantity: Quantity,
    /// Side of the incoming (taker) order
    pub aggressor: Side,
    pub executed_at: i64, // Unix nanos
}

impl Trade {
    pub fn new(
        sequence: u64,
        buy_order_id: OrderId,
        sell_order_id: OrderId,
        price: Price,
        quantity: Quantity,
        aggressor: Side,
        executed_at: i64,
    ) -> Self {
        Self {
            sequence,
            buy_order_id,
            sell_order_id,
            price,
            quantity,
            aggressor,
            executed_at,
        }
    }

    /// Calculate trade value (price × quantity)
    ///
    /// `None` if the notional exceeds the `Decimal` range.
    pub fn trade_value(&self) -> Option<Decimal> {
        self.quantity.as_decimal().checked_mul(self.price.as_decimal())
    }

    /// Id of the order that was resting when the trade printed
    pub fn maker_order_id(&self) -> OrderId {
        match self.aggressor {
            Side::BUY => self.sell_order_id,
            Side::SELL => self.buy_order_id,
        }
    }
}
