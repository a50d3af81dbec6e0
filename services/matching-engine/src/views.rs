//! Read-only views returned by the engine
//!
//! All views are owned copies taken under the read lock; none of them
//! borrow engine state.

use serde::{Deserialize, Serialize};
use types::order::Order;
use types::trade::Trade;

use crate::book::PriceLevel;

/// Resting volume per side and their ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeInfo {
    pub bid_volume: u64,
    pub ask_volume: u64,
    /// `bid_volume / ask_volume`; 1.0 when both are zero, the configured
    /// sentinel when only the ask side is empty
    pub imbalance: f64,
}

impl VolumeInfo {
    pub(crate) fn new(bid_volume: u64, ask_volume: u64, sentinel: f64) -> Self {
        let imbalance = match (bid_volume, ask_volume) {
            (0, 0) => 1.0,
            (_, 0) => sentinel,
            (bid, ask) => bid as f64 / ask as f64,
        };
        Self {
            bid_volume,
            ask_volume,
            imbalance,
        }
    }
}

/// Aggregated depth, best price outward on both sides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepthSnapshot {
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

/// Full copy of the book: resting orders in priority order, the trade
/// log and the pending stops in arrival order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<Order>,
    pub asks: Vec<Order>,
    pub trades: Vec<Trade>,
    pub pending_stops: Vec<Order>,
}
