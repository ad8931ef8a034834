use std::fmt;

use serde::Serialize;

use crate::core::format::{format_amount, DEFAULT_CURRENCY_SYMBOL};

/// Income minus expense for a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetDelta {
    pub amount: f64,
    pub is_deficit: bool,
}

impl BudgetDelta {
    /// Calculator label, with the amount rendered in `symbol`.
    pub fn label(&self, symbol: &str) -> String {
        let mut label = format!("Monthly Savings: {}", format_amount(self.amount, symbol));
        if self.is_deficit {
            label.push_str(" (Deficit)");
        }
        label
    }
}

impl fmt::Display for BudgetDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(DEFAULT_CURRENCY_SYMBOL))
    }
}

pub fn budget_delta(income: f64, expense: f64) -> BudgetDelta {
    let amount = income - expense;
    BudgetDelta {
        amount,
        is_deficit: amount < 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overspending_is_a_deficit() {
        assert_eq!(
            budget_delta(3000.0, 3500.0),
            BudgetDelta {
                amount: -500.0,
                is_deficit: true,
            }
        );
    }

    #[test]
    fn break_even_is_not_a_deficit() {
        let delta = budget_delta(2000.0, 2000.0);
        assert_eq!(delta.amount, 0.0);
        assert!(!delta.is_deficit);
    }

    #[test]
    fn no_rounding_is_applied() {
        let delta = budget_delta(100.004, 0.001);
        assert!((delta.amount - 100.003).abs() < 1e-9);
    }

    #[test]
    fn display_marks_deficits() {
        assert_eq!(
            budget_delta(3000.0, 3500.0).to_string(),
            "Monthly Savings: $-500.00 (Deficit)"
        );
        assert_eq!(
            budget_delta(4200.0, 3000.0).label("€"),
            "Monthly Savings: €1200.00"
        );
    }
}
