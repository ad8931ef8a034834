//! The only writer of ledger state: load, apply one change, persist.

use crate::{
    core::time::{Clock, SystemClock},
    errors::{FinanceError, Result},
    ledger::{Budget, Expense, Goal, Ledger},
    storage::LedgerRepository,
};

/// Applies add/delete operations to a user's ledger and persists the result.
///
/// Mutations take `&mut self`, so a single service never interleaves two
/// read-modify-write cycles.
pub struct LedgerService {
    repository: Box<dyn LedgerRepository>,
    clock: Box<dyn Clock>,
}

impl LedgerService {
    pub fn new(repository: Box<dyn LedgerRepository>) -> Self {
        Self::with_clock(repository, Box::new(SystemClock))
    }

    pub fn with_clock(repository: Box<dyn LedgerRepository>, clock: Box<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Current snapshot for `user`; empty when the user has no data yet.
    pub fn ledger(&self, user: &str) -> Result<Ledger> {
        self.repository.load(user)
    }

    pub fn add_budget(
        &mut self,
        user: &str,
        name: impl Into<String>,
        amount: f64,
    ) -> Result<Ledger> {
        let amount = ensure_finite("budget amount", amount)?;
        let budget = Budget::new(name, amount);
        tracing::debug!(user, name = %budget.name, amount, "adding budget");
        self.mutate(user, |ledger| {
            ledger.add_budget(budget);
            true
        })
    }

    pub fn delete_budget(&mut self, user: &str, index: usize) -> Result<Ledger> {
        self.mutate(user, |ledger| {
            removed(user, "budget", index, ledger.remove_budget(index))
        })
    }

    /// Appends an expense stamped with the service clock's current time.
    pub fn add_expense(
        &mut self,
        user: &str,
        name: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Result<Ledger> {
        let amount = ensure_finite("expense amount", amount)?;
        let expense = Expense::new(name, category, amount, self.clock.now());
        tracing::debug!(
            user,
            name = %expense.name,
            category = %expense.category,
            amount,
            "adding expense"
        );
        self.mutate(user, |ledger| {
            ledger.add_expense(expense);
            true
        })
    }

    pub fn delete_expense(&mut self, user: &str, index: usize) -> Result<Ledger> {
        self.mutate(user, |ledger| {
            removed(user, "expense", index, ledger.remove_expense(index))
        })
    }

    pub fn add_goal(
        &mut self,
        user: &str,
        name: impl Into<String>,
        target: f64,
    ) -> Result<Ledger> {
        let target = ensure_finite("goal target", target)?;
        let goal = Goal::new(name, target);
        tracing::debug!(user, name = %goal.name, target, "adding goal");
        self.mutate(user, |ledger| {
            ledger.add_goal(goal);
            true
        })
    }

    pub fn delete_goal(&mut self, user: &str, index: usize) -> Result<Ledger> {
        self.mutate(user, |ledger| {
            removed(user, "goal", index, ledger.remove_goal(index))
        })
    }

    /// Loads, applies `change`, and saves only when `change` reports a modification.
    fn mutate<F>(&mut self, user: &str, change: F) -> Result<Ledger>
    where
        F: FnOnce(&mut Ledger) -> bool,
    {
        let mut ledger = self.repository.load(user)?;
        if change(&mut ledger) {
            self.repository.save(user, &ledger)?;
        }
        Ok(ledger)
    }
}

fn removed<T>(user: &str, kind: &str, index: usize, item: Option<T>) -> bool {
    if item.is_none() {
        tracing::debug!(user, kind, index, "delete index out of range; nothing removed");
    }
    item.is_some()
}

fn ensure_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        tracing::warn!(field, %value, "rejecting non-finite amount");
        Err(FinanceError::InvalidAmount(format!(
            "{} must be a finite number, got {}",
            field, value
        )))
    }
}

/// Converts text from an input field into an amount, rejecting anything non-numeric.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| FinanceError::InvalidAmount(format!("`{}` is not a number", trimmed)))?;
    ensure_finite("amount", value)
}
