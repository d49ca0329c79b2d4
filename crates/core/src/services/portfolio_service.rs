use std::collections::HashMap;

use crate::models::analytics::{AllocationSlice, HoldingMetrics, PortfolioPerformance};
use crate::models::investment::Investment;

/// Derives performance and dividend metrics from a list of holdings.
///
/// Every figure is recomputed from the holdings passed in; nothing is cached.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate the whole portfolio.
    ///
    /// Computes:
    /// - Capital invested and current market value
    /// - Profit/loss, absolute and as a percentage of capital
    /// - Annual dividend income and global yield on cost
    /// - Per-holding yields
    pub fn performance(&self, investments: &[Investment]) -> PortfolioPerformance {
        let total_invested = total(investments.iter().map(Investment::cost_basis));
        let current_value = total(investments.iter().map(Investment::market_value));
        let total_dividends = total(investments.iter().map(Investment::annual_dividend));
        let total_pl = current_value - total_invested;

        let holdings = investments.iter().map(|inv| self.holding_metrics(inv)).collect();

        PortfolioPerformance {
            total_invested,
            current_value,
            total_pl,
            percent_pl: percent_of(total_pl, total_invested),
            total_dividends,
            yield_on_cost_global: percent_of(total_dividends, total_invested),
            holdings,
        }
    }

    /// Metrics for a single holding.
    pub fn holding_metrics(&self, investment: &Investment) -> HoldingMetrics {
        let cost_basis = investment.cost_basis();
        let market_value = investment.market_value();

        HoldingMetrics {
            investment_id: investment.id,
            ticker: investment.ticker.clone(),
            cost_basis,
            market_value,
            unrealized_pl: market_value - cost_basis,
            annual_dividend: investment.annual_dividend(),
            current_yield: percent_of(investment.dividend_per_share, investment.current_price),
            yield_on_cost: percent_of(investment.dividend_per_share, investment.purchase_price),
        }
    }

    /// Market value grouped by ticker, in order of first appearance.
    pub fn allocation(&self, investments: &[Investment]) -> Vec<AllocationSlice> {
        let mut order: Vec<String> = Vec::new();
        let mut values: HashMap<String, f64> = HashMap::new();

        for inv in investments {
            if !values.contains_key(&inv.ticker) {
                order.push(inv.ticker.clone());
            }
            *values.entry(inv.ticker.clone()).or_insert(0.0) += inv.market_value();
        }

        let grand_total = total(values.values().copied());

        order
            .into_iter()
            .map(|ticker| {
                let value = values.get(&ticker).copied().unwrap_or(0.0);
                AllocationSlice {
                    percent: percent_of(value, grand_total),
                    ticker,
                    value,
                }
            })
            .collect()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}

/// numerator / denominator × 100, or 0 when the denominator is not positive.
pub(crate) fn percent_of(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

/// Sum starting from +0.0. `Iterator::sum` over `f64` yields -0.0 for an
/// empty iterator, which would print as "-0.00".
pub(crate) fn total<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(0.0, |acc, x| acc + x)
}
