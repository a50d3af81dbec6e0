//! Order book state
//!
//! `BookState` owns both priority indexes, the locator, the pending stop
//! queue and the trade log. Every structural change to a resting order
//! goes through the methods here so that the index and the locator are
//! updated together.
//!
//! Nothing in this module locks; `MatchingEngine` holds the lock around it.

pub mod locator;
pub mod price_level;
pub mod priority_index;
pub mod stop_queue;
pub mod trade_log;

pub use locator::{Location, OrderLocator};
pub use price_level::PriceLevel;
pub use priority_index::{PriorityIndex, PriorityKey};
pub use stop_queue::PendingStopQueue;
pub use trade_log::TradeLog;

use std::collections::HashSet;

use types::ids::OrderId;
use types::numeric::Quantity;
use types::order::{Order, Side};

use crate::matching::MatchExecutor;

#[derive(Debug)]
pub(crate) struct BookState {
    pub(crate) bids: PriorityIndex,
    pub(crate) asks: PriorityIndex,
    pub(crate) locator: OrderLocator,
    pub(crate) stops: PendingStopQueue,
    pub(crate) trades: TradeLog,
    pub(crate) executor: MatchExecutor,
    /// Every id ever accepted, live or retired
    admitted: HashSet<OrderId>,
    /// Admission sequence, the final tie-break of the priority key
    next_sequence: u64,
}

impl BookState {
    pub(crate) fn new(trade_log_capacity: usize) -> Self {
        Self {
            bids: PriorityIndex::new(Side::BUY),
            asks: PriorityIndex::new(Side::SELL),
            locator: OrderLocator::new(),
            stops: PendingStopQueue::new(),
            trades: TradeLog::with_capacity(trade_log_capacity),
            executor: MatchExecutor::new(1),
            admitted: HashSet::new(),
            next_sequence: 0,
        }
    }

    pub(crate) fn side(&self, side: Side) -> &PriorityIndex {
        match side {
            Side::BUY => &self.bids,
            Side::SELL => &self.asks,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut PriorityIndex {
        match side {
            Side::BUY => &mut self.bids,
            Side::SELL => &mut self.asks,
        }
    }

    /// Record an id as used by this book
    ///
    /// Returns false if it was accepted before, whether it is still
    /// resting, waiting as a stop, or already filled or cancelled.
    pub(crate) fn admit(&mut self, order_id: OrderId) -> bool {
        self.admitted.insert(order_id)
    }

    /// Post an order on its own side and record it in the locator
    pub(crate) fn rest(&mut self, order: Order) -> PriorityKey {
        self.next_sequence += 1;
        let sequence = self.next_sequence;
        let (order_id, side) = (order.order_id, order.side);

        let key = self.side_mut(side).insert(order, sequence);
        let previous = self.locator.insert(order_id, side, key);
        assert!(previous.is_none(), "order {order_id} rested twice");
        key
    }

    /// Take a resting order out of both the index and the locator
    pub(crate) fn remove(&mut self, order_id: &OrderId) -> Option<Order> {
        let location = self.locator.remove(order_id)?;
        let order = self.side_mut(location.side).remove(&location.key);
        assert!(order.is_some(), "locator entry for {order_id} has no index entry");
        order
    }

    /// Reduce a resting order in place, keeping its time priority
    ///
    /// Removes the order from both structures once it reaches zero.
    /// Returns the quantity left resting.
    pub(crate) fn reduce(&mut self, side: Side, key: &PriorityKey, filled: Quantity) -> Quantity {
        let Some(order) = self.side_mut(side).get_mut(key) else {
            panic!("reduce on a key missing from the {side:?} index");
        };
        order.quantity = order.quantity.saturating_sub(filled);
        let (remaining, order_id) = (order.quantity, order.order_id);

        if remaining.is_zero() {
            self.side_mut(side).remove(key);
            let location = self.locator.remove(&order_id);
            assert!(location.is_some(), "filled order {order_id} missing from locator");
        }
        remaining
    }

    pub(crate) fn resting(&self, order_id: &OrderId) -> Option<&Order> {
        let location = self.locator.get(order_id)?;
        self.side(location.side).get(&location.key)
    }

    pub(crate) fn resting_count(&self) -> usize {
        self.locator.len()
    }
}
