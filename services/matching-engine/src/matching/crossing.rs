//! Crossing detection logic
//!
//! Determines when an incoming order is price-compatible with a resting one

use types::numeric::Price;
use types::order::{Order, OrderType, Side};

/// Check if a bid and ask can match at given prices
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming limit price crosses a resting price
pub fn incoming_can_match(incoming_side: Side, incoming_price: Price, resting_price: Price) -> bool {
    match incoming_side {
        Side::BUY => can_match(incoming_price, resting_price),
        Side::SELL => can_match(resting_price, incoming_price),
    }
}

/// Check if `order` may trade against a resting order at `resting_price`
///
/// Market orders cross unconditionally.
pub fn order_can_match(order: &Order, resting_price: Price) -> bool {
    match order.order_type {
        OrderType::Market => true,
        _ => incoming_can_match(order.side, order.price, resting_price),
    }
}
