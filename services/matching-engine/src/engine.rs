//! Matching engine core
//!
//! `MatchingEngine` is the public, thread-safe face of one order book.
//! Mutators take the write lock exactly once per call and hand the
//! unlocked `BookState` to the matching module; stop cascades triggered
//! inside that call run on the same guard. Read views take the read lock
//! and return owned copies.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use types::errors::{EngineError, OrderError};
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{timestamp_now, CancelReason, Order, RejectReason, Side};
use types::trade::Trade;

use crate::book::BookState;
use crate::config::EngineConfig;
use crate::matching;
use crate::views::{BookSnapshot, DepthSnapshot, VolumeInfo};

/// Main matching engine
pub struct MatchingEngine {
    state: RwLock<BookState>,
    config: EngineConfig,
}

/// Result of submitting an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitResult {
    /// Order was completely filled
    Filled { trades: Vec<Trade> },
    /// Order rests on the book, possibly after partial fills
    Resting { trades: Vec<Trade>, remaining: Quantity },
    /// Unfilled part was discarded (immediate-or-cancel, market)
    Cancelled {
        trades: Vec<Trade>,
        unfilled: Quantity,
        reason: CancelReason,
    },
    /// Order was dropped without touching the book (fill-or-kill)
    Rejected { reason: RejectReason },
    /// Stop-loss order is waiting for its trigger
    StopQueued,
}

impl SubmitResult {
    /// Trades produced directly by this order
    pub fn trades(&self) -> &[Trade] {
        match self {
            SubmitResult::Filled { trades }
            | SubmitResult::Resting { trades, .. }
            | SubmitResult::Cancelled { trades, .. } => trades,
            SubmitResult::Rejected { .. } | SubmitResult::StopQueued => &[],
        }
    }

    pub fn executed_quantity(&self) -> Quantity {
        self.trades().iter().map(|trade| trade.quantity).sum()
    }
}

impl MatchingEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        info!(
            depth_levels = config.depth_levels,
            imbalance_sentinel = config.imbalance_sentinel,
            "MatchingEngine initialized"
        );

        Self {
            state: RwLock::new(BookState::new(config.trade_log_capacity)),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Submit an order to the book
    ///
    /// Matches the order per its type, rests or discards any residual,
    /// then fires every stop order the resulting last trade price
    /// triggers. A stop-loss is only queued and returns `StopQueued`
    /// without evaluating any stop. Errors only for malformed input, in
    /// which case the book is untouched.
    pub fn add_order(&self, order: Order) -> Result<SubmitResult, EngineError> {
        order.validate()?;

        let mut state = self.state.write();
        if !state.admit(order.order_id) {
            return Err(OrderError::DuplicateOrderId {
                order_id: order.order_id.get(),
            }
            .into());
        }

        debug!(order_id = %order.order_id, side = ?order.side, order_type = ?order.order_type, "order accepted");
        Ok(matching::submit(&mut state, order))
    }

    /// Cancel a resting order
    ///
    /// Returns false if the id is not resting (unknown, filled, already
    /// cancelled, or a pending or triggered stop).
    pub fn cancel_order(&self, order_id: OrderId) -> bool {
        let mut state = self.state.write();
        let cancelled = state.remove(&order_id).is_some();
        if cancelled {
            debug!(%order_id, "order cancelled");
        }
        cancelled
    }

    /// Cancel-replace a resting order with a new price and/or quantity
    ///
    /// The replacement gets a fresh timestamp and goes to the back of its
    /// price level. It is not matched against the opposite side, even if
    /// the new price crosses.
    pub fn modify_order(
        &self,
        order_id: OrderId,
        new_price: Option<Price>,
        new_quantity: Option<Quantity>,
    ) -> Result<bool, OrderError> {
        if let Some(price) = new_price.filter(|price| !price.is_positive()) {
            return Err(OrderError::InvalidPrice(format!(
                "modify of {order_id} to non-positive price {price}"
            )));
        }
        if new_quantity.is_some_and(|quantity| quantity.is_zero()) {
            return Err(OrderError::InvalidQuantity(format!(
                "modify of {order_id} to zero quantity"
            )));
        }

        let mut state = self.state.write();
        let Some(mut order) = state.remove(&order_id) else {
            return Ok(false);
        };

        if let Some(price) = new_price {
            order.price = price;
        }
        if let Some(quantity) = new_quantity {
            order.quantity = quantity;
        }
        order.created_at = timestamp_now();

        debug!(%order_id, price = %order.price, quantity = %order.quantity, "order modified");
        state.rest(order);
        Ok(true)
    }

    pub fn best_bid(&self) -> Option<Order> {
        self.state.read().bids.best().map(|(_, order)| order.clone())
    }

    pub fn best_ask(&self) -> Option<Order> {
        self.state.read().asks.best().map(|(_, order)| order.clone())
    }

    /// Best ask minus best bid
    pub fn spread(&self) -> Option<Decimal> {
        let (bid, ask) = self.best_prices()?;
        Some(ask.as_decimal() - bid.as_decimal())
    }

    pub fn mid_price(&self) -> Option<Decimal> {
        let (bid, ask) = self.best_prices()?;
        Some((bid.as_decimal() + ask.as_decimal()) / Decimal::TWO)
    }

    fn best_prices(&self) -> Option<(Price, Price)> {
        let state = self.state.read();
        let (_, bid) = state.bids.best()?;
        let (_, ask) = state.asks.best()?;
        Some((bid.price, ask.price))
    }

    /// Volume-weighted average trade price; zero before the first trade
    pub fn vwap(&self) -> Decimal {
        self.state.read().trades.vwap()
    }

    pub fn last_trade_price(&self) -> Option<Price> {
        self.state.read().trades.last_price()
    }

    /// Resting volume per side, saturating at `u64::MAX`
    pub fn volume_info(&self) -> VolumeInfo {
        let state = self.state.read();
        VolumeInfo::new(
            state.bids.total_quantity().get(),
            state.asks.total_quantity().get(),
            self.config.imbalance_sentinel,
        )
    }

    pub fn total_bid_volume(&self) -> u64 {
        self.state.read().bids.total_quantity().get()
    }

    pub fn total_ask_volume(&self) -> u64 {
        self.state.read().asks.total_quantity().get()
    }

    pub fn imbalance(&self) -> f64 {
        self.volume_info().imbalance
    }

    /// Resting quantity at exactly `price` (prices are tick-exact)
    pub fn volume_at_price(&self, price: Price, side: Side) -> u64 {
        self.state.read().side(side).quantity_at(price).get()
    }

    /// Resting quantity with `min_price <= price <= max_price`
    pub fn volume_in_range(&self, min_price: Price, max_price: Price, side: Side) -> u64 {
        self.state
            .read()
            .side(side)
            .quantity_between(min_price, max_price)
            .get()
    }

    /// The last `n` trades in chronological order
    pub fn recent_trades(&self, n: usize) -> Vec<Trade> {
        self.state.read().trades.recent(n)
    }

    pub fn trades(&self) -> Vec<Trade> {
        self.state.read().trades.as_slice().to_vec()
    }

    pub fn trade_count(&self) -> usize {
        self.state.read().trades.len()
    }

    /// Up to `levels` aggregated price levels per side
    pub fn depth(&self, levels: usize) -> DepthSnapshot {
        let state = self.state.read();
        DepthSnapshot {
            bids: state.bids.levels(levels),
            asks: state.asks.levels(levels),
        }
    }

    pub fn default_depth(&self) -> DepthSnapshot {
        self.depth(self.config.depth_levels)
    }

    /// The resting order for an id
    pub fn order(&self, order_id: OrderId) -> Option<Order> {
        self.state.read().resting(&order_id).cloned()
    }

    pub fn resting_count(&self) -> usize {
        self.state.read().resting_count()
    }

    pub fn pending_stops(&self) -> Vec<Order> {
        self.state.read().stops.iter().cloned().collect()
    }

    pub fn snapshot(&self) -> BookSnapshot {
        let state = self.state.read();
        BookSnapshot {
            bids: state.bids.iter().cloned().collect(),
            asks: state.asks.iter().cloned().collect(),
            trades: state.trades.as_slice().to_vec(),
            pending_stops: state.stops.iter().cloned().collect(),
        }
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
