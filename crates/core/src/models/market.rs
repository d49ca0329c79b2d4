//! Market data shapes returned by the AI assistant.
//!
//! The assistant produces loosely-typed JSON, so every field has a default,
//! `null` reads as that default, and a few fields accept either a number or a
//! string.

use serde::{Deserialize, Deserializer, Serialize};

use super::investment::normalize_months;

/// A single-ticker quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockQuote {
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    /// Currency code as reported ("USD", "EUR", "GBP", "JPY", "CNY", …)
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub change_percent: f64,
    /// Annual dividend per share in `currency`, 0 if none
    #[serde(deserialize_with = "null_as_default")]
    pub annual_dividend: f64,
    #[serde(deserialize_with = "lenient_months")]
    pub payment_months: Vec<u8>,
}

impl StockQuote {
    /// A quote is usable only if it carries a positive, finite price.
    pub fn has_price(&self) -> bool {
        self.price.is_finite() && self.price > 0.0
    }

    /// Uppercase the symbol and currency, sanitize payment months.
    pub fn normalized(mut self) -> Self {
        self.symbol = self.symbol.trim().to_uppercase();
        self.currency = self.currency.trim().to_uppercase();
        self.payment_months = normalize_months(&self.payment_months);
        if !self.annual_dividend.is_finite() || self.annual_dividend < 0.0 {
            self.annual_dividend = 0.0;
        }
        self
    }
}

/// A market headline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsHeadline {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Short category ("Tech", "Crypto", "Macro")
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    /// Relative age as reported ("2h ago")
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
}

/// Snapshot of one stock index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSnapshot {
    /// Preformatted price, e.g. "5,012.34 USD"
    #[serde(deserialize_with = "string_or_number")]
    pub price: String,
    /// Percent change today
    #[serde(deserialize_with = "null_as_default")]
    pub change: f64,
}

/// The three indices shown on the market screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalIndices {
    pub sp500: Option<IndexSnapshot>,
    pub nasdaq: Option<IndexSnapshot>,
    pub ibex: Option<IndexSnapshot>,
}

impl GlobalIndices {
    pub fn is_empty(&self) -> bool {
        self.sp500.is_none() && self.nasdaq.is_none() && self.ibex.is_none()
    }
}

/// Indices and headlines fetched together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketOverview {
    pub indices: Option<GlobalIndices>,
    pub news: Vec<NewsHeadline>,
}

/// One value of a yearly series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnualMetric {
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationMetrics {
    #[serde(deserialize_with = "null_as_default")]
    pub pe: f64,
    /// Free-cash-flow yield, %
    #[serde(deserialize_with = "null_as_default")]
    pub fcf_yield: f64,
    /// %
    #[serde(deserialize_with = "null_as_default")]
    pub dividend_yield: f64,
    /// Preformatted, e.g. "2.30 B"
    #[serde(deserialize_with = "string_or_number")]
    pub market_cap: String,
    /// %
    #[serde(deserialize_with = "null_as_default")]
    pub payout_ratio: f64,
}

/// Multi-year fundamentals, oldest year first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundamentalHistory {
    #[serde(deserialize_with = "null_as_default")]
    pub revenue: Vec<AnnualMetric>,
    #[serde(deserialize_with = "null_as_default")]
    pub eps: Vec<AnnualMetric>,
    #[serde(deserialize_with = "null_as_default")]
    pub fcf: Vec<AnnualMetric>,
    #[serde(deserialize_with = "null_as_default")]
    pub dividends: Vec<AnnualMetric>,
    #[serde(deserialize_with = "null_as_default")]
    pub debt: Vec<AnnualMetric>,
    #[serde(deserialize_with = "null_as_default")]
    pub roe: Vec<AnnualMetric>,
    #[serde(deserialize_with = "null_as_default")]
    pub roic: Vec<AnnualMetric>,
}

/// Deep fundamentals for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepStockAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    /// One-sentence company description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: ValuationMetrics,
    #[serde(deserialize_with = "null_as_default")]
    pub history: FundamentalHistory,
}

/// Read `null` as the field's default (0, "", empty list).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept `"2021"`, `2021` or `null` for a string field.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Accept any JSON array of numbers; keep whole numbers in 0–11 and drop the rest.
fn lenient_months<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values
        .iter()
        .filter_map(|v| v.as_f64())
        .filter(|m| m.fract() == 0.0 && (0.0..12.0).contains(m))
        .map(|m| m as u8)
        .collect())
}
