use std::fmt;

use crate::{
    core::format::{format_amount, DEFAULT_CURRENCY_SYMBOL},
    errors::{FinanceError, Result},
};

const MONTHS_PER_YEAR: f64 = 12.0;
/// Longest horizon the calculator will simulate.
pub const MAX_PROJECTION_YEARS: f64 = 1000.0;

/// Inputs for a monthly-compounded savings simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsProjection {
    pub principal: f64,
    pub monthly_contribution: f64,
    /// Nominal yearly rate in percent, e.g. `5.0` for 5%.
    pub annual_rate_percent: f64,
    /// May be fractional; rounded to whole months.
    pub years: f64,
}

impl SavingsProjection {
    /// Number of compounding periods, `round(years * 12)`.
    pub fn months(&self) -> Result<u32> {
        if !self.years.is_finite() || self.years < 0.0 {
            return Err(FinanceError::InvalidInput(format!(
                "years must be a non-negative number, got {}",
                self.years
            )));
        }
        if self.years > MAX_PROJECTION_YEARS {
            return Err(FinanceError::InvalidInput(format!(
                "{} years exceeds the {} year projection limit",
                self.years, MAX_PROJECTION_YEARS
            )));
        }
        Ok((self.years * MONTHS_PER_YEAR).round() as u32)
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / MONTHS_PER_YEAR
    }

    /// Final balance. Each month the contribution lands first, then interest accrues.
    pub fn run(&self) -> Result<f64> {
        self.validate()?;
        let months = self.months()?;
        let growth = 1.0 + self.monthly_rate();
        let mut balance = self.principal;
        for _ in 0..months {
            balance += self.monthly_contribution;
            balance *= growth;
        }
        tracing::trace!(months, balance, "savings projection complete");
        Ok(balance)
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("principal", self.principal),
            ("monthly contribution", self.monthly_contribution),
            ("annual rate", self.annual_rate_percent),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(FinanceError::InvalidInput(format!(
                    "{} must be a finite number, got {}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}

/// Projects savings under monthly compounding; see [`SavingsProjection::run`].
pub fn project_savings(
    principal: f64,
    monthly_contribution: f64,
    annual_rate_percent: f64,
    years: f64,
) -> Result<f64> {
    SavingsProjection {
        principal,
        monthly_contribution,
        annual_rate_percent,
        years,
    }
    .run()
}

/// Result line as shown by the savings calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedSavings(pub f64);

impl EstimatedSavings {
    pub fn label(&self, symbol: &str) -> String {
        format!("Estimated Savings: {}", format_amount(self.0, symbol))
    }
}

impl fmt::Display for EstimatedSavings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(DEFAULT_CURRENCY_SYMBOL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_everything_stays_zero() {
        for years in [0.0, 1.0, 2.5, 30.0] {
            assert_eq!(project_savings(0.0, 0.0, 0.0, years).unwrap(), 0.0);
        }
    }

    #[test]
    fn principal_alone_is_unchanged_without_interest() {
        assert_eq!(project_savings(1000.0, 0.0, 0.0, 5.0).unwrap(), 1000.0);
    }

    #[test]
    fn contributions_without_interest_accumulate_linearly() {
        assert_close(project_savings(100.0, 50.0, 0.0, 2.0).unwrap(), 100.0 + 50.0 * 24.0);
    }

    #[test]
    fn contribution_lands_before_interest() {
        // One month at 12%/yr: (0 + 100) * 1.01.
        let one_month = 1.0 / 12.0;
        assert_close(project_savings(0.0, 100.0, 12.0, one_month).unwrap(), 101.0);

        let compound_after = 100.0;
        assert!(project_savings(0.0, 100.0, 12.0, one_month).unwrap() > compound_after);
    }

    #[test]
    fn compounds_monthly_over_a_year() {
        let expected = 1000.0 * (1.0_f64 + 0.06 / 12.0).powi(12);
        assert_close(project_savings(1000.0, 0.0, 6.0, 1.0).unwrap(), expected);
    }

    #[test]
    fn fractional_years_round_to_whole_months() {
        let projection = SavingsProjection {
            principal: 0.0,
            monthly_contribution: 10.0,
            annual_rate_percent: 0.0,
            years: 0.54,
        };
        // 0.54 * 12 = 6.48 -> 6 months
        assert_eq!(projection.months().unwrap(), 6);
        assert_close(projection.run().unwrap(), 60.0);
    }

    #[test]
    fn negative_or_non_finite_years_are_invalid() {
        for years in [-1.0, f64::NAN, f64::INFINITY] {
            let err = project_savings(1000.0, 0.0, 5.0, years).unwrap_err();
            assert!(matches!(err, FinanceError::InvalidInput(_)), "{years}");
        }
    }

    #[test]
    fn horizon_is_limited_to_max_projection_years() {
        let at_limit = SavingsProjection {
            principal: 1.0,
            monthly_contribution: 0.0,
            annual_rate_percent: 0.0,
            years: MAX_PROJECTION_YEARS,
        };
        assert_eq!(at_limit.months().unwrap(), 12_000);
        assert_eq!(at_limit.run().unwrap(), 1.0);

        let err = project_savings(1.0, 0.0, 0.0, 2e7).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidInput(_)));
    }

    #[test]
    fn non_finite_amounts_are_invalid() {
        let err = project_savings(f64::NAN, 0.0, 5.0, 1.0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidInput(_)));
        let err = project_savings(0.0, 0.0, f64::INFINITY, 1.0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidInput(_)));
    }

    #[test]
    fn estimated_savings_label() {
        assert_eq!(
            EstimatedSavings(1051.161897881733).to_string(),
            "Estimated Savings: $1051.16"
        );
    }
}
