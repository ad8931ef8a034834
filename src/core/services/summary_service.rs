//! Derived figures over a ledger snapshot. Nothing here mutates the ledger.

use serde::Serialize;

use crate::ledger::{Goal, Ledger};

const PROGRESS_CAP: f64 = 100.0;

/// Headline totals shown side by side on the overview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overview {
    pub total_budget: f64,
    pub total_expense: f64,
}

/// Progress of one goal, as displayed in goal order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub name: String,
    pub target: f64,
    pub saved: f64,
    pub progress: f64,
}

pub struct SummaryService;

impl SummaryService {
    pub fn total_budgets(ledger: &Ledger) -> f64 {
        ledger.budgets.iter().map(|budget| budget.amount).sum()
    }

    pub fn total_expenses(ledger: &Ledger) -> f64 {
        ledger.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Sum of expenses whose category equals the goal's name.
    pub fn saved_toward(ledger: &Ledger, goal: &Goal) -> f64 {
        ledger
            .expenses_for(&goal.name)
            .map(|expense| expense.amount)
            .sum()
    }

    /// Percentage of `goal.target` covered by matching expenses, capped at 100.
    pub fn goal_progress(ledger: &Ledger, goal: &Goal) -> f64 {
        progress_percent(Self::saved_toward(ledger, goal), goal.target)
    }

    pub fn goals_progress(ledger: &Ledger) -> Vec<GoalProgress> {
        ledger
            .goals
            .iter()
            .map(|goal| {
                let saved = Self::saved_toward(ledger, goal);
                GoalProgress {
                    name: goal.name.clone(),
                    target: goal.target,
                    saved,
                    progress: progress_percent(saved, goal.target),
                }
            })
            .collect()
    }

    pub fn overview(ledger: &Ledger) -> Overview {
        Overview {
            total_budget: Self::total_budgets(ledger),
            total_expense: Self::total_expenses(ledger),
        }
    }
}

/// `saved / target * 100` capped at 100. A zero target reports 0; NaN passes through.
pub fn progress_percent(saved: f64, target: f64) -> f64 {
    if target == 0.0 {
        return 0.0;
    }
    let percent = saved / target * 100.0;
    // f64::min would swallow NaN.
    if percent > PROGRESS_CAP {
        PROGRESS_CAP
    } else {
        percent
    }
}
