//! Order id → priority key lookup
//!
//! Stores the key an order was filed under rather than a position, so an
//! entry stays valid across structural changes to the index. Resolving
//! a key is an O(log n) map lookup.

use std::collections::HashMap;

use types::ids::OrderId;
use types::order::Side;

use super::priority_index::PriorityKey;

/// Where a resting order lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub side: Side,
    pub key: PriorityKey,
}

#[derive(Debug, Clone, Default)]
pub struct OrderLocator {
    entries: HashMap<OrderId, Location>,
}

impl OrderLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a location, returning the previous one if the id was present
    pub fn insert(&mut self, order_id: OrderId, side: Side, key: PriorityKey) -> Option<Location> {
        self.entries.insert(order_id, Location { side, key })
    }

    pub fn remove(&mut self, order_id: &OrderId) -> Option<Location> {
        self.entries.remove(order_id)
    }

    pub fn get(&self, order_id: &OrderId) -> Option<Location> {
        self.entries.get(order_id).copied()
    }

    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.entries.contains_key(order_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
