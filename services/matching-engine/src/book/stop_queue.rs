//! Pending stop-loss orders
//!
//! Stops never enter a priority index. They wait here in arrival order
//! until the last trade price crosses their trigger.

use types::ids::OrderId;
use types::numeric::Price;
use types::order::{Order, Side};

#[derive(Debug, Clone, Default)]
pub struct PendingStopQueue {
    orders: Vec<Order>,
}

impl PendingStopQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Remove and return the earliest-arrived stop triggered by `last_price`
    ///
    /// The relative order of the remaining stops is preserved.
    pub fn take_triggered(&mut self, last_price: Price) -> Option<Order> {
        let position = self
            .orders
            .iter()
            .position(|order| is_triggered(order, last_price))?;
        Some(self.orders.remove(position))
    }

    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.orders.iter().any(|order| &order.order_id == order_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Buy stops fire at or above their trigger, sell stops at or below
fn is_triggered(order: &Order, last_price: Price) -> bool {
    let Some(stop) = order.stop_price else {
        return false;
    };
    match order.side {
        Side::BUY => last_price >= stop,
        Side::SELL => last_price <= stop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::Quantity;

    fn stop(id: u64, side: Side, trigger: &str) -> Order {
        Order::stop_loss(OrderId::new(id), side, Quantity::new(1), trigger.parse().unwrap())
    }

    #[test]
    fn test_trigger_direction() {
        let mut queue = PendingStopQueue::new();
        queue.push(stop(1, Side::SELL, "99.00"));
        queue.push(stop(2, Side::BUY, "101.00"));

        assert!(queue.take_triggered("100.00".parse().unwrap()).is_none());

        let fired = queue.take_triggered("99.00".parse().unwrap()).unwrap();
        assert_eq!(fired.order_id, OrderId::new(1));

        let fired = queue.take_triggered("101.50".parse().unwrap()).unwrap();
        assert_eq!(fired.order_id, OrderId::new(2));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_arrival_order_preserved() {
        let mut queue = PendingStopQueue::new();
        queue.push(stop(1, Side::SELL, "95.00"));
        queue.push(stop(2, Side::SELL, "99.00"));
        queue.push(stop(3, Side::BUY, "105.00"));
        queue.push(stop(4, Side::SELL, "98.00"));

        let last = "97.00".parse().unwrap();
        assert_eq!(queue.take_triggered(last).unwrap().order_id, OrderId::new(2));
        assert_eq!(queue.take_triggered(last).unwrap().order_id, OrderId::new(4));
        assert!(queue.take_triggered(last).is_none());

        let remaining: Vec<u64> = queue.iter().map(|o| o.order_id.get()).collect();
        assert_eq!(remaining, vec![1, 3]);
        assert!(queue.contains(&OrderId::new(3)));
    }
}
