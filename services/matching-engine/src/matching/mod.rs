//! Matching logic module
//!
//! Implements order-type dispatch, the price-time priority matching loop
//! and the stop-loss cascade. Everything here works on an already locked
//! `BookState`; the stop cascade resubmits through `execute`, never
//! through the locking entry points.

pub mod crossing;
pub mod executor;

pub use crossing::can_match;
pub use executor::MatchExecutor;

use tracing::{debug, info, trace};
use types::order::{timestamp_now, CancelReason, Order, OrderType, RejectReason};
use types::trade::Trade;

use crate::book::BookState;
use crate::engine::SubmitResult;

/// Admit one validated order and run the stop cascade it may cause
///
/// A stop-loss is only queued. It is evaluated after the next submission
/// that reaches the cascade, never on its own admission.
pub(crate) fn submit(state: &mut BookState, order: Order) -> SubmitResult {
    if order.order_type == OrderType::StopLoss {
        debug!(order_id = %order.order_id, side = ?order.side, stop_price = ?order.stop_price, "stop order queued");
        state.stops.push(order);
        return SubmitResult::StopQueued;
    }

    let result = dispatch(state, order);
    trigger_stops(state);
    result
}

fn dispatch(state: &mut BookState, order: Order) -> SubmitResult {
    match order.order_type {
        OrderType::FillOrKill if !has_liquidity(state, &order) => {
            debug!(order_id = %order.order_id, quantity = %order.quantity, "fill-or-kill killed: insufficient liquidity");
            SubmitResult::Rejected {
                reason: RejectReason::InsufficientLiquidity,
            }
        }
        _ => execute(state, order),
    }
}

/// Whether the opposite side can absorb `order` in full at acceptable prices
pub(crate) fn has_liquidity(state: &BookState, order: &Order) -> bool {
    let available = state
        .side(order.side.opposite())
        .reachable_quantity(order.quantity, |price| crossing::order_can_match(order, price));
    available >= order.quantity
}

/// Match an order and settle its residual according to its type
fn execute(state: &mut BookState, mut order: Order) -> SubmitResult {
    let trades = match_order(state, &mut order, timestamp_now());

    if order.quantity.is_zero() {
        return SubmitResult::Filled { trades };
    }

    match order.order_type {
        OrderType::ImmediateOrCancel | OrderType::Market => {
            let reason = if order.order_type == OrderType::Market {
                CancelReason::UnfilledMarket
            } else {
                CancelReason::UnfilledImmediateOrCancel
            };
            debug!(order_id = %order.order_id, unfilled = %order.quantity, ?reason, "residual discarded");
            SubmitResult::Cancelled {
                trades,
                unfilled: order.quantity,
                reason,
            }
        }
        _ => {
            let remaining = order.quantity;
            debug!(order_id = %order.order_id, side = ?order.side, price = %order.price, %remaining, "order resting");
            state.rest(order);
            SubmitResult::Resting { trades, remaining }
        }
    }
}

/// Walk the opposite side from the best price until the order is filled
/// or the head no longer crosses
fn match_order(state: &mut BookState, order: &mut Order, timestamp: i64) -> Vec<Trade> {
    let resting_side = order.side.opposite();
    let mut trades = Vec::new();

    while !order.quantity.is_zero() {
        let Some((key, resting)) = state.side(resting_side).best() else {
            break;
        };
        if !crossing::order_can_match(order, resting.price) {
            break;
        }
        let resting = resting.clone();

        let fill = order.quantity.min(resting.quantity);
        let trade = state.executor.execute_trade(order, &resting, fill, timestamp);
        order.quantity = order.quantity.saturating_sub(fill);
        state.reduce(resting_side, &key, fill);

        trace!(
            sequence = trade.sequence,
            buy = %trade.buy_order_id,
            sell = %trade.sell_order_id,
            price = %trade.price,
            quantity = %trade.quantity,
            "trade executed"
        );
        state.trades.append(trade.clone());
        trades.push(trade);
    }

    trades
}

/// Fire every stop whose trigger the last trade price satisfies
///
/// After each triggered order executes the queue is scanned again from
/// the front against the new last price, so a cascade resolves in the
/// same order as resubmitting recursively.
fn trigger_stops(state: &mut BookState) {
    while let Some(last_price) = state.trades.last_price() {
        let Some(stop) = state.stops.take_triggered(last_price) else {
            break;
        };
        info!(
            order_id = %stop.order_id,
            side = ?stop.side,
            stop_price = ?stop.stop_price,
            %last_price,
            "stop order triggered"
        );
        execute(state, stop.into_market());
    }
}
