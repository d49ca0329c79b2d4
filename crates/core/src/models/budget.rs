use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A monthly spending limit for one expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,

    /// Matched exactly against `Transaction::category`
    pub category: String,

    /// Monthly limit, EUR
    pub limit: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            limit,
        }
    }
}

/// Health of a single budget, classified on the unclamped spent/limit ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Below 75 % of the limit
    Healthy,
    /// 75 % up to (not including) 100 %
    Warning,
    /// At or above the limit
    Over,
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BudgetStatus::Healthy => write!(f, "healthy"),
            BudgetStatus::Warning => write!(f, "warning"),
            BudgetStatus::Over => write!(f, "over"),
        }
    }
}

/// Spending measured against one budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub budget: Budget,

    /// Sum of categorized expenses for this budget's category
    pub spent: f64,

    /// spent / limit × 100, unclamped
    pub ratio_percent: f64,

    /// `ratio_percent` clamped to 100 for progress bars
    pub percentage: f64,

    pub status: BudgetStatus,

    /// Amount above the limit, 0 if within
    pub overspent: f64,

    /// Amount left before the limit, 0 if exceeded
    pub remaining: f64,
}

/// Aggregate of all budgets (feeds the spent/remaining/exceeded pie).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBreakdown {
    pub total_limit: f64,

    /// Spending in budgeted categories only
    pub total_spent: f64,

    /// min(total_spent, total_limit)
    pub spent_within_limit: f64,

    /// max(total_limit − total_spent, 0)
    pub remaining: f64,

    /// max(total_spent − total_limit, 0)
    pub overspent: f64,
}

impl BudgetBreakdown {
    pub fn is_over(&self) -> bool {
        self.overspent > 0.0
    }
}

/// Everything the budget screen needs in one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    pub spending_by_category: HashMap<String, f64>,
    pub progress: Vec<BudgetProgress>,
    pub breakdown: BudgetBreakdown,
}
