use serde::{Deserialize, Serialize};

use super::amount::nullable_f64;

/// A savings target, funded by expenses whose category matches its name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub name: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub target: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: f64) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}
