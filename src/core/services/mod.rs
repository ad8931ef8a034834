pub mod ledger_service;
pub mod summary_service;

pub use ledger_service::{parse_amount, LedgerService};
pub use summary_service::{GoalProgress, Overview, SummaryService};
