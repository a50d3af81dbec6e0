//! Trade execution logic
//!
//! Turns one match between an incoming and a resting order into a `Trade`

use types::numeric::Quantity;
use types::order::{Order, Side};
use types::trade::Trade;

/// Match executor for handling trade generation
#[derive(Debug)]
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new match executor with starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Execute a trade between the incoming (taker) and resting (maker) order
    ///
    /// The execution price is always the resting order's price.
    pub fn execute_trade(
        &mut self,
        incoming: &Order,
        resting: &Order,
        quantity: Quantity,
        timestamp: i64,
    ) -> Trade {
        let (buy_order_id, sell_order_id) = match incoming.side {
            Side::BUY => (incoming.order_id, resting.order_id),
            Side::SELL => (resting.order_id, incoming.order_id),
        };

        Trade::new(
            self.next_sequence(),
            buy_order_id,
            sell_order_id,
            resting.price,
            quantity,
            incoming.side,
            timestamp,
        )
    }
}
