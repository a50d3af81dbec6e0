//! Order types
//!
//! An `Order` is both the unit of work handed to the engine and, once
//! resting, the record the book sorts on.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::OrderError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// Execution policy of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Match at any price; never rests
    Market,
    /// Match up to the limit price, rest the remainder
    Limit,
    /// Full match at the limit price or nothing
    FillOrKill,
    /// Match what is available now, drop the remainder
    ImmediateOrCancel,
    /// Inert until the last trade price crosses `stop_price`, then a market order
    StopLoss,
}

/// Why an admitted order was dropped without trading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    /// Fill-or-kill could not be filled in full
    InsufficientLiquidity,
}

/// Why the unfilled part of an order was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancelReason {
    /// Immediate-or-cancel residual
    UnfilledImmediateOrCancel,
    /// Market order ran out of opposite liquidity
    UnfilledMarket,
}

/// Current wall-clock time in Unix nanoseconds
pub fn timestamp_now() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}

/// Order record
///
/// `price` is ignored for market orders. `stop_price` is only meaningful
/// for stop-loss orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    pub price: Price,
    pub quantity: Quantity,
    pub stop_price: Option<Price>,
    pub created_at: i64, // Unix nanos
}

impl Order {
    /// Create an order with an explicit creation timestamp
    pub fn new(
        order_id: OrderId,
        side: Side,
        order_type: OrderType,
        price: Price,
        quantity: Quantity,
        created_at: i64,
    ) -> Self {
        Self {
            order_id,
            side,
            order_type,
            price,
            quantity,
            stop_price: None,
            created_at,
        }
    }

    pub fn limit(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self::new(order_id, side, OrderType::Limit, price, quantity, timestamp_now())
    }

    pub fn market(order_id: OrderId, side: Side, quantity: Quantity) -> Self {
        Self::new(order_id, side, OrderType::Market, Price::ZERO, quantity, timestamp_now())
    }

    pub fn fill_or_kill(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self::new(order_id, side, OrderType::FillOrKill, price, quantity, timestamp_now())
    }

    pub fn immediate_or_cancel(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self::new(order_id, side, OrderType::ImmediateOrCancel, price, quantity, timestamp_now())
    }

    /// Sell stops fire when the last trade is at or below `stop_price`,
    /// buy stops when it is at or above.
    pub fn stop_loss(order_id: OrderId, side: Side, quantity: Quantity, stop_price: Price) -> Self {
        Self {
            stop_price: Some(stop_price),
            ..Self::new(order_id, side, OrderType::StopLoss, Price::ZERO, quantity, timestamp_now())
        }
    }

    /// Replace the creation timestamp
    pub fn with_timestamp(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn is_buy(&self) -> bool {
        self.side == Side::BUY
    }

    /// Whether the order is priced (crosses only up to its limit)
    pub fn has_limit(&self) -> bool {
        matches!(
            self.order_type,
            OrderType::Limit | OrderType::FillOrKill | OrderType::ImmediateOrCancel
        )
    }

    /// Convert a triggered stop into the market order it stands for
    pub fn into_market(self) -> Self {
        Self {
            order_type: OrderType::Market,
            ..self
        }
    }

    /// Check the caller contract for admission
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.quantity.is_zero() {
            return Err(OrderError::InvalidQuantity(format!(
                "order {} has zero quantity",
                self.order_id
            )));
        }

        if self.has_limit() && !self.price.is_positive() {
            return Err(OrderError::InvalidPrice(format!(
                "order {} has non-positive limit price {}",
                self.order_id, self.price
            )));
        }

        if self.order_type == OrderType::StopLoss {
            match self.stop_price {
                Some(stop) if stop.is_positive() => {}
                Some(stop) => {
                    return Err(OrderError::InvalidPrice(format!(
                        "order {} has non-positive stop price {}",
                        self.order_id, stop
                    )))
                }
                None => return Err(OrderError::MissingStopPrice { order_id: self.order_id.get() }),
            }
        }

        Ok(())
    }
}
