#![doc(test(attr(deny(warnings))))]

//! Fintrack core offers the transaction store, month-based aggregation, and
//! persistence primitives behind a personal expense and savings tracker.

pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack core tracing initialized.");
    });
}
