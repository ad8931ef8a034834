//! Stateless calculators driven by raw numeric input; they never touch a ledger.

pub mod delta;
pub mod projection;

pub use delta::{budget_delta, BudgetDelta};
pub use projection::{project_savings, EstimatedSavings, SavingsProjection};
