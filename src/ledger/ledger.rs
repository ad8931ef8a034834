use serde::{Deserialize, Serialize};

use super::{budget::Budget, expense::Expense, goal::Goal};

/// One user's budgets, expenses, and goals. Sequence order is display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_budget(&mut self, budget: Budget) -> usize {
        self.budgets.push(budget);
        self.budgets.len() - 1
    }

    pub fn add_expense(&mut self, expense: Expense) -> usize {
        self.expenses.push(expense);
        self.expenses.len() - 1
    }

    pub fn add_goal(&mut self, goal: Goal) -> usize {
        self.goals.push(goal);
        self.goals.len() - 1
    }

    /// Removes the budget at `index`; `None` leaves the ledger untouched.
    pub fn remove_budget(&mut self, index: usize) -> Option<Budget> {
        remove_at(&mut self.budgets, index)
    }

    pub fn remove_expense(&mut self, index: usize) -> Option<Expense> {
        remove_at(&mut self.expenses, index)
    }

    pub fn remove_goal(&mut self, index: usize) -> Option<Goal> {
        remove_at(&mut self.goals, index)
    }

    pub fn goal(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.name == name)
    }

    /// Expenses whose category names `goal_name`, in insertion order.
    pub fn expenses_for<'a>(&'a self, goal_name: &'a str) -> impl Iterator<Item = &'a Expense> {
        self.expenses
            .iter()
            .filter(move |expense| expense.contributes_to(goal_name))
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty() && self.expenses.is_empty() && self.goals.is_empty()
    }
}

fn remove_at<T>(items: &mut Vec<T>, index: usize) -> Option<T> {
    if index < items.len() {
        Some(items.remove(index))
    } else {
        None
    }
}
