//! Append-only trade history
//!
//! Source of the last trade price (stop triggering), VWAP and the
//! recent-trades view. Entries are never rewritten.

use rust_decimal::Decimal;
use types::numeric::Price;
use types::trade::Trade;

#[derive(Debug, Clone, Default)]
pub struct TradeLog {
    trades: Vec<Trade>,
}

impl TradeLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trades: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// Execution price of the most recent trade
    pub fn last_price(&self) -> Option<Price> {
        self.trades.last().map(|trade| trade.price)
    }

    /// Volume-weighted average price over the whole log; zero when empty
    ///
    /// Computed exactly as total notional over total volume. If the
    /// notional leaves the `Decimal` range the running weighted mean is
    /// used instead.
    pub fn vwap(&self) -> Decimal {
        if self.trades.is_empty() {
            return Decimal::ZERO;
        }
        self.exact_vwap().unwrap_or_else(|| self.running_vwap())
    }

    fn exact_vwap(&self) -> Option<Decimal> {
        let (value, volume) = self
            .trades
            .iter()
            .try_fold((Decimal::ZERO, Decimal::ZERO), |(value, volume), trade| {
                Some((
                    value.checked_add(trade.trade_value()?)?,
                    volume.checked_add(trade.quantity.as_decimal())?,
                ))
            })?;
        value.checked_div(volume)
    }

    /// Each step moves the mean toward the trade price by a weight <= 1
    fn running_vwap(&self) -> Decimal {
        let mut mean = Decimal::ZERO;
        let mut volume = Decimal::ZERO;
        for trade in &self.trades {
            let quantity = trade.quantity.as_decimal();
            volume = volume.saturating_add(quantity);
            mean += (trade.price.as_decimal() - mean) * (quantity / volume);
        }
        mean
    }

    /// The last `n` trades, oldest first
    pub fn recent(&self, n: usize) -> Vec<Trade> {
        let start = self.trades.len().saturating_sub(n);
        self.trades[start..].to_vec()
    }

    pub fn as_slice(&self) -> &[Trade] {
        &self.trades
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
