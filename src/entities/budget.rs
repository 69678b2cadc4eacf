use serde::{Deserialize, Serialize};

use crate::Record;

/// One line of the production budget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Record)]
#[record(key = "budget", name = "Budget")]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated: f64,
    #[serde(default)]
    pub actual: f64,
}

impl BudgetItem {
    /// Estimated minus actual; negative when over budget.
    pub fn variance(&self) -> f64 {
        self.estimated - self.actual
    }

    pub fn is_over_budget(&self) -> bool {
        self.actual > self.estimated
    }

    /// Totals across a set of budget lines: (estimated, actual).
    pub fn totals<'a>(items: impl IntoIterator<Item = &'a BudgetItem>) -> (f64, f64) {
        items
            .into_iter()
            .fold((0.0, 0.0), |(est, act), item| (est + item.estimated, act + item.actual))
    }
}
