use serde::{Deserialize, Serialize};

/// Ledger-wide totals: cash movements plus the mark-to-market value of holdings.
///
/// Never stored; `LedgerService::summarize` rebuilds it from the session on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of income transactions
    pub total_income: f64,

    /// Sum of expense transactions
    pub total_expenses: f64,

    /// Sum of investment transactions (cash sent to fund purchases)
    pub investments_cash_out: f64,

    /// Current value of all holdings
    pub investments_value: f64,

    /// (income − expenses − investments_cash_out) + investments_value
    pub total_balance: f64,
}

impl PortfolioSummary {
    /// Cash left on the ledger, excluding holdings.
    pub fn cash_balance(&self) -> f64 {
        self.total_income - self.total_expenses - self.investments_cash_out
    }
}
