//! Types library for the limit order book
//!
//! Value types shared by the matching engine and anything that drives it
//! (simulators, backtesters, gateways).
//!
//! # Modules
//! - `ids`: Order identifiers
//! - `numeric`: Fixed-point price and integer quantity types
//! - `order`: Order types, sides and reason codes
//! - `trade`: Trade execution records
//! - `errors`: Error taxonomy

pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod errors;
