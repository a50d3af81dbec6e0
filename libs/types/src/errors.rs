//! Error types for the order book
//!
//! Only malformed input is reported as an error. Unknown ids on
//! cancel/modify and policy outcomes (fill-or-kill kills, discarded
//! residuals) are ordinary results, not errors.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] NumericError),
}

/// Order admission errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Stop-loss order #{order_id} has no stop price")]
    MissingStopPrice { order_id: u64 },

    #[error("Order #{order_id} was already submitted to this book")]
    DuplicateOrderId { order_id: u64 },
}

/// Price and quantity conversion errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Price out of range: {0}")]
    PriceOutOfRange(String),

    #[error("Invalid decimal: {0}")]
    InvalidDecimal(String),
}
