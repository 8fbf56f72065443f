#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the expense-logging primitives and interactive CLI
//! that power a small personal expense tracker backed by a flat text file.

pub mod cli;
pub mod config;
pub mod errors;
pub mod expense;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
