use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::amount::nullable_f64;

/// A recorded outflow. `category` doubles as a soft link to the goal of the same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub amount: f64,
    pub date: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            amount,
            date,
        }
    }

    /// Whether this expense counts toward the goal called `goal_name`.
    pub fn contributes_to(&self, goal_name: &str) -> bool {
        self.category == goal_name
    }
}
