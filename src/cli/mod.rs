//! Line-oriented shell over the ledger services. Holds no finance logic of its own.

pub mod core;
pub mod output;
mod shell;

pub use shell::run_cli;
