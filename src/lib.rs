#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records personal expense entries in a JSON file and answers
//! listing, monthly and per-category total queries through a text menu.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense tracker tracing initialized.");
    });
}
