//! Shared helpers for integration tests

#![allow(dead_code)]

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn px(s: &str) -> Price {
    s.parse().unwrap()
}

pub fn limit(id: u64, side: Side, price: &str, qty: u64) -> Order {
    Order::limit(OrderId::new(id), side, px(price), Quantity::new(qty))
}

pub fn limit_ticks(id: u64, side: Side, ticks: i64, qty: u64, created_at: i64) -> Order {
    Order::limit(OrderId::new(id), side, Price::from_ticks(ticks), Quantity::new(qty))
        .with_timestamp(created_at)
}
