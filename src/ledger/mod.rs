//! Ledger domain models and persistence-friendly record types.

pub mod amount;
pub mod budget;
pub mod expense;
pub mod goal;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use budget::Budget;
pub use expense::Expense;
pub use goal::Goal;
pub use ledger::Ledger;
