#![doc(test(attr(deny(warnings))))]

//! Hisaab Core offers the ledger collections, balance derivation, and
//! persistence primitives behind a personal hisaab (credits, expenses, and
//! udhaar) tracker.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Hisaab Core tracing initialized.");
    });
}
