//! Serde support for amounts written by older clients, which stored unparseable input as `null`.

use serde::{Deserialize, Deserializer};

/// Reads a number, mapping `null` to `NaN` so one bad record cannot make a store unreadable.
pub fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use crate::ledger::{Budget, Goal};

    #[test]
    fn null_reads_as_nan() {
        let budget: Budget = serde_json::from_str(r#"{"name":"Broken","amount":null}"#).unwrap();
        assert!(budget.amount.is_nan());
        let goal: Goal = serde_json::from_str(r#"{"name":"Car","target":2500}"#).unwrap();
        assert_eq!(goal.target, 2500.0);
    }

    #[test]
    fn nan_is_written_back_as_null() {
        let json = serde_json::to_string(&Budget::new("Broken", f64::NAN)).unwrap();
        assert_eq!(json, r#"{"name":"Broken","amount":null}"#);
    }
}
