#![doc(test(attr(deny(warnings))))]

//! Gem Core offers the inventory, remainder-ledger, and analytics primitives
//! that power a small gemstone trading tracker: calendar activity grids,
//! dashboard totals, and month-over-month comparisons over snapshots of the
//! stones, remainders, archives, and notes collections.

pub mod analytics;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Gem Core tracing initialized.");
    });
}
