use std::fmt::Write;

use crate::models::investment::Investment;
use crate::models::summary::PortfolioSummary;
use crate::models::transaction::{Transaction, TransactionType};
use crate::services::portfolio_service::total;

/// Ledger totals and the textual snapshot handed to the advisor.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Total income, expenses and balance.
    ///
    /// Money sent to the brokerage leaves the cash balance, and the holdings it
    /// bought come back in at their current market value.
    pub fn summarize(&self, transactions: &[Transaction], investments: &[Investment]) -> PortfolioSummary {
        let total_income = sum_of(transactions, TransactionType::Income);
        let total_expenses = sum_of(transactions, TransactionType::Expense);
        let investments_cash_out = sum_of(transactions, TransactionType::Investment);
        let investments_value = total(investments.iter().map(Investment::market_value));

        PortfolioSummary {
            total_income,
            total_expenses,
            investments_cash_out,
            investments_value,
            total_balance: (total_income - total_expenses - investments_cash_out) + investments_value,
        }
    }

    /// Plain-text financial snapshot for the AI advisor. Values are EUR.
    pub fn financial_context(&self, summary: &PortfolioSummary, investments: &[Investment]) -> String {
        let mut ctx = String::from("Current financial summary (values in EUR):\n");
        let _ = writeln!(ctx, "- Total balance: €{:.2}", summary.total_balance);
        let _ = writeln!(ctx, "- Total income: €{:.2}", summary.total_income);
        let _ = writeln!(ctx, "- Total expenses: €{:.2}", summary.total_expenses);
        let _ = writeln!(ctx, "- Investment portfolio value: €{:.2}", summary.investments_value);

        ctx.push_str("\nHoldings:\n");
        if investments.is_empty() {
            ctx.push_str("- none\n");
        }
        for inv in investments {
            let _ = writeln!(
                ctx,
                "- {} shares of {}. Bought in {}. Current price: €{:.2}",
                inv.shares, inv.ticker, inv.original_currency, inv.current_price
            );
        }
        ctx
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

fn sum_of(transactions: &[Transaction], kind: TransactionType) -> f64 {
    total(
        transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount),
    )
}
