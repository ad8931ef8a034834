#![doc(test(attr(deny(warnings))))]

//! Finance Core keeps a user's budgets, expenses, and savings goals and derives
//! the figures a dashboard shows: totals, goal progress, projected savings, and
//! income-versus-expense deltas.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod simulation;
pub mod storage;
pub mod utils;

pub use errors::{FinanceError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
