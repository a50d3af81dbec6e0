//! Price-time ordered collection of resting orders for one side
//!
//! Orders are keyed by `PriorityKey`, a strict total order:
//! price (best first), then creation time, then admission sequence.
//! Iteration always runs from the best price outward.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

use super::price_level::PriceLevel;

/// Sort key of a resting order
///
/// `rank` is the price in ticks, negated on the bid side so that the
/// natural ascending order of the map is always best-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriorityKey {
    rank: i64,
    created_at: i64,
    sequence: u64,
}

impl PriorityKey {
    pub fn new(side: Side, price: Price, created_at: i64, sequence: u64) -> Self {
        Self {
            rank: rank_of(side, price),
            created_at,
            sequence,
        }
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Every key at one price level
    fn level_range(rank: i64) -> RangeInclusive<PriorityKey> {
        Self::span(rank, rank)
    }

    fn span(low_rank: i64, high_rank: i64) -> RangeInclusive<PriorityKey> {
        let low = PriorityKey { rank: low_rank, created_at: i64::MIN, sequence: 0 };
        let high = PriorityKey { rank: high_rank, created_at: i64::MAX, sequence: u64::MAX };
        low..=high
    }
}

fn rank_of(side: Side, price: Price) -> i64 {
    match side {
        Side::BUY => price.ticks().saturating_neg(),
        Side::SELL => price.ticks(),
    }
}

/// Resting orders of one side in priority order
#[derive(Debug, Clone)]
pub struct PriorityIndex {
    side: Side,
    orders: BTreeMap<PriorityKey, Order>,
}

impl PriorityIndex {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            orders: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Insert an order under the given admission sequence and return its key
    pub fn insert(&mut self, order: Order, sequence: u64) -> PriorityKey {
        debug_assert_eq!(order.side, self.side, "order inserted on the wrong side");
        let key = PriorityKey::new(self.side, order.price, order.created_at, sequence);
        self.orders.insert(key, order);
        key
    }

    pub fn remove(&mut self, key: &PriorityKey) -> Option<Order> {
        self.orders.remove(key)
    }

    pub fn get(&self, key: &PriorityKey) -> Option<&Order> {
        self.orders.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &PriorityKey) -> Option<&mut Order> {
        self.orders.get_mut(key)
    }

    /// The order at the head of the queue
    pub fn best(&self) -> Option<(PriorityKey, &Order)> {
        self.orders.iter().next().map(|(key, order)| (*key, order))
    }

    /// Resting orders from the best price outward
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn total_quantity(&self) -> Quantity {
        self.orders.values().map(|order| order.quantity).sum()
    }

    /// Resting quantity at exactly `price`
    pub fn quantity_at(&self, price: Price) -> Quantity {
        self.orders
            .range(PriorityKey::level_range(rank_of(self.side, price)))
            .map(|(_, order)| order.quantity)
            .sum()
    }

    /// Resting quantity with `min <= price <= max`
    pub fn quantity_between(&self, min: Price, max: Price) -> Quantity {
        if min > max {
            return Quantity::zero();
        }
        let (low, high) = match self.side {
            Side::BUY => (rank_of(self.side, max), rank_of(self.side, min)),
            Side::SELL => (rank_of(self.side, min), rank_of(self.side, max)),
        };
        self.orders
            .range(PriorityKey::span(low, high))
            .map(|(_, order)| order.quantity)
            .sum()
    }

    /// Quantity reachable from the head while `acceptable` holds,
    /// stopping early once `wanted` is covered
    pub fn reachable_quantity(&self, wanted: Quantity, acceptable: impl Fn(Price) -> bool) -> Quantity {
        let mut available = Quantity::zero();
        for order in self.orders.values() {
            if !acceptable(order.price) {
                break;
            }
            available += order.quantity;
            if available >= wanted {
                break;
            }
        }
        available
    }

    /// Aggregate the best `depth` price levels
    pub fn levels(&self, depth: usize) -> Vec<PriceLevel> {
        let mut levels: Vec<PriceLevel> = Vec::new();
        for order in self.orders.values() {
            match levels.last_mut() {
                Some(level) if level.price == order.price => level.add(order.quantity),
                _ => {
                    if levels.len() == depth {
                        break;
                    }
                    levels.push(PriceLevel::new(order.price, order.quantity));
                }
            }
        }
        levels
    }
}
