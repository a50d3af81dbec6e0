//! Aggregated price level
//!
//! A level summarises every resting order at one exact price. Levels are
//! built on demand from the priority index for depth queries; they are
//! never the source of truth for matching.

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};

/// Resting liquidity at a single price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// The price of this level.
    pub price: Price,
    /// Total quantity at this level across all orders.
    pub total_quantity: Quantity,
    /// Number of orders resting at this level.
    pub order_count: u32,
}

impl PriceLevel {
    /// Create a new price level holding one order
    pub fn new(price: Price, quantity: Quantity) -> Self {
        Self {
            price,
            total_quantity: quantity,
            order_count: 1,
        }
    }

    /// Fold another order at the same price into the level
    pub fn add(&mut self, quantity: Quantity) {
        self.total_quantity += quantity;
        self.order_count += 1;
    }
}
