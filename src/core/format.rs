//! Display helpers mirroring the dashboard's number formatting.

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Two decimal places behind the currency symbol, sign after the symbol (`$-12.50`).
pub fn format_amount(value: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, value)
}

/// Goal progress with one decimal place, e.g. `40.0%`.
pub fn format_progress(progress: f64) -> String {
    format!("{:.1}%", progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(1200.0, "$"), "$1200.00");
        assert_eq!(format_amount(-500.0, "$"), "$-500.00");
        assert_eq!(format_amount(0.126, "€"), "€0.13");
    }

    #[test]
    fn progress_uses_one_decimal() {
        assert_eq!(format_progress(40.0), "40.0%");
        assert_eq!(format_progress(33.333), "33.3%");
        assert_eq!(format_progress(f64::NAN), "NaN%");
    }
}
