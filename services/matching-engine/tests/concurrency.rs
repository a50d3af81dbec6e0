//! Multi-threaded access to one engine
//!
//! Writers submit crossing orders at a single price while readers poll
//! the views. Afterwards quantity must be conserved and the book must
//! never have been seen crossed.

mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use common::{init_tracing, limit};
use matching_engine::MatchingEngine;
use rust_decimal::Decimal;
use types::ids::OrderId;
use types::order::Side;

const WRITERS: u64 = 4;
const ORDERS_PER_WRITER: u64 = 250;

#[test]
fn concurrent_writers_conserve_quantity() {
    init_tracing();
    let engine = Arc::new(MatchingEngine::new());
    let done = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut submitted = (0u64, 0u64);
                for n in 0..ORDERS_PER_WRITER {
                    let id = writer * ORDERS_PER_WRITER + n + 1;
                    let qty = n % 7 + 1;
                    let side = if (n + writer) % 2 == 0 { Side::BUY } else { Side::SELL };
                    engine.add_order(limit(id, side, "100.00", qty)).unwrap();
                    match side {
                        Side::BUY => submitted.0 += qty,
                        Side::SELL => submitted.1 += qty,
                    }
                }
                submitted
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    if let Some(spread) = engine.spread() {
                        assert!(spread > Decimal::ZERO, "book crossed: spread {spread}");
                    }
                    let depth = engine.default_depth();
                    assert!(depth.bids.len() <= 5 && depth.asks.len() <= 5);
                    let _ = engine.volume_info();
                    let _ = engine.recent_trades(3);
                }
            })
        })
        .collect();

    let (bought, sold) = writers
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .fold((0, 0), |acc, (b, s)| (acc.0 + b, acc.1 + s));

    done.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.join().unwrap();
    }

    let traded: u64 = engine.trades().iter().map(|t| t.quantity.get()).sum();
    assert_eq!(bought, traded + engine.total_bid_volume());
    assert_eq!(sold, traded + engine.total_ask_volume());

    // Everything sits at one price, so at most one side can be left
    assert!(engine.total_bid_volume() == 0 || engine.total_ask_volume() == 0);

    let sequences: Vec<u64> = engine.trades().iter().map(|t| t.sequence).collect();
    assert!(sequences.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn concurrent_cancels_keep_views_consistent() {
    init_tracing();
    let engine = Arc::new(MatchingEngine::new());

    for id in 1..=400u64 {
        let price = format!("{}.00", 90 + id % 10);
        engine.add_order(limit(id, Side::BUY, &price, 1)).unwrap();
    }

    let cancellers: Vec<_> = (0..4u64)
        .map(|lane| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                // Every lane races for the same even ids
                let mut ids: Vec<u64> = (2..=400).step_by(2).collect();
                if lane % 2 == 1 {
                    ids.reverse();
                }
                ids.into_iter()
                    .filter(|id| engine.cancel_order(OrderId::new(*id)))
                    .count()
            })
        })
        .collect();

    let cancelled: usize = cancellers.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(cancelled, 200);
    assert_eq!(engine.resting_count(), 200);
    assert_eq!(engine.total_bid_volume(), 200);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.bids.len(), 200);
    assert!(snapshot.bids.iter().all(|o| o.order_id.get() % 2 == 1));
    assert!(snapshot
        .bids
        .iter()
        .all(|o| engine.order(o.order_id).as_ref() == Some(o)));
}
