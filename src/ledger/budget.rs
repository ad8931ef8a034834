use serde::{Deserialize, Serialize};

use super::amount::nullable_f64;

/// A named spending allowance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub name: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub amount: f64,
}

impl Budget {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
