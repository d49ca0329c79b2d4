use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portfolio-wide performance and dividend figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPerformance {
    /// Σ shares × purchase price
    pub total_invested: f64,

    /// Σ shares × current price
    pub current_value: f64,

    /// current_value − total_invested
    pub total_pl: f64,

    /// total_pl / total_invested × 100 (0 with nothing invested)
    pub percent_pl: f64,

    /// Σ shares × dividend per share (annual)
    pub total_dividends: f64,

    /// total_dividends / total_invested × 100 (0 with nothing invested)
    pub yield_on_cost_global: f64,

    /// Per-position breakdown, in portfolio order
    pub holdings: Vec<HoldingMetrics>,
}

/// Metrics for a single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingMetrics {
    pub investment_id: Uuid,
    pub ticker: String,
    pub cost_basis: f64,
    pub market_value: f64,
    pub unrealized_pl: f64,

    /// shares × dividend per share
    pub annual_dividend: f64,

    /// dividend per share / current price × 100
    pub current_yield: f64,

    /// dividend per share / purchase price × 100
    pub yield_on_cost: f64,
}

/// One slice of the allocation chart: market value grouped by ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    pub ticker: String,
    pub value: f64,
    /// Share of total market value, 0–100
    pub percent: f64,
}
