//! Matching Engine
//!
//! Single-instrument limit order book with price-time priority matching.
//!
//! Supported order types: market, limit, fill-or-kill, immediate-or-cancel
//! and stop-loss. Trades always print at the resting order's price.
//!
//! **Key Invariants:**
//! - Price-time priority strictly enforced (price, then creation time,
//!   then admission sequence)
//! - Every resting order is in exactly one priority index and has exactly
//!   one locator entry
//! - The trade log is append-only
//! - Stop orders never rest; they wait in the stop queue until triggered
//! - Conservation of quantity
//!
//! All mutation happens under one write lock; reads share a read lock.

pub mod book;
pub mod config;
pub mod engine;
pub mod matching;
pub mod views;

pub use config::EngineConfig;
pub use engine::{MatchingEngine, SubmitResult};
pub use views::{BookSnapshot, DepthSnapshot, VolumeInfo};
