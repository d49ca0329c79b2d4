use std::collections::HashMap;

use crate::models::budget::{Budget, BudgetBreakdown, BudgetOverview, BudgetProgress, BudgetStatus};
use crate::models::transaction::Transaction;
use crate::services::portfolio_service::total;

/// Ratio (in percent) from which a budget is flagged as a warning.
pub const WARNING_THRESHOLD_PERCENT: f64 = 75.0;

/// Ratio (in percent) from which a budget counts as over its limit.
pub const OVER_THRESHOLD_PERCENT: f64 = 100.0;

/// Compares categorized spending against per-category limits.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Sum expense amounts per category. Uncategorized expenses and
    /// non-expense transactions are ignored.
    pub fn spending_by_category(&self, transactions: &[Transaction]) -> HashMap<String, f64> {
        let mut map: HashMap<String, f64> = HashMap::new();
        for t in transactions {
            if !t.is_expense() {
                continue;
            }
            if let Some(category) = t.category.as_deref().filter(|c| !c.is_empty()) {
                *map.entry(category.to_string()).or_insert(0.0) += t.amount;
            }
        }
        map
    }

    /// Measure one budget against the spending map.
    pub fn progress(&self, budget: &Budget, spending: &HashMap<String, f64>) -> BudgetProgress {
        let spent = spending.get(&budget.category).copied().unwrap_or(0.0);
        let ratio_percent = spent_ratio_percent(spent, budget.limit);

        BudgetProgress {
            budget: budget.clone(),
            spent,
            ratio_percent,
            percentage: ratio_percent.min(OVER_THRESHOLD_PERCENT),
            status: self.classify(ratio_percent),
            overspent: (spent - budget.limit).max(0.0),
            remaining: (budget.limit - spent).max(0.0),
        }
    }

    /// Status for an unclamped spent/limit percentage.
    pub fn classify(&self, ratio_percent: f64) -> BudgetStatus {
        if ratio_percent >= OVER_THRESHOLD_PERCENT {
            BudgetStatus::Over
        } else if ratio_percent >= WARNING_THRESHOLD_PERCENT {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Healthy
        }
    }

    /// Totals across all budgets. Spending is counted once per budget, so two
    /// budgets sharing a category both count that category's spending.
    pub fn breakdown(&self, budgets: &[Budget], spending: &HashMap<String, f64>) -> BudgetBreakdown {
        let total_limit = total(budgets.iter().map(|b| b.limit));
        let total_spent = total(
            budgets
                .iter()
                .map(|b| spending.get(&b.category).copied().unwrap_or(0.0)),
        );

        BudgetBreakdown {
            total_limit,
            total_spent,
            spent_within_limit: total_spent.min(total_limit),
            remaining: (total_limit - total_spent).max(0.0),
            overspent: (total_spent - total_limit).max(0.0),
        }
    }

    /// Spending map, per-budget progress and global breakdown in one pass.
    pub fn overview(&self, budgets: &[Budget], transactions: &[Transaction]) -> BudgetOverview {
        let spending_by_category = self.spending_by_category(transactions);
        let progress = budgets
            .iter()
            .map(|b| self.progress(b, &spending_by_category))
            .collect();
        let breakdown = self.breakdown(budgets, &spending_by_category);

        BudgetOverview {
            spending_by_category,
            progress,
            breakdown,
        }
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}

/// spent / limit × 100. A non-positive limit is fully used as soon as
/// anything is spent; never NaN.
fn spent_ratio_percent(spent: f64, limit: f64) -> f64 {
    if limit > 0.0 {
        spent / limit * 100.0
    } else if spent > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}
