use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::market::StockQuote;

/// Currency a holding was originally bought in.
/// Stored prices are always EUR; this only records where they came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
}

impl Currency {
    /// ISO code ("EUR" / "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A stock position. All price fields are EUR regardless of `original_currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: Uuid,

    /// Ticker symbol, uppercased (e.g., "AAPL", "SAN.MC")
    pub ticker: String,

    /// Company name
    pub name: String,

    pub shares: f64,

    /// Price paid per share, EUR
    pub purchase_price: f64,

    pub original_currency: Currency,

    pub purchase_date: NaiveDate,

    /// Latest known price per share, EUR. Changes only on refresh.
    pub current_price: f64,

    /// Annual dividend per share, EUR
    pub dividend_per_share: f64,

    /// Calendar months (0 = January) in which the holding pays
    #[serde(default)]
    pub payment_months: Vec<u8>,
}

impl Investment {
    pub fn new(input: NewInvestment) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticker: input.ticker.trim().to_uppercase(),
            name: input.name,
            shares: input.shares,
            purchase_price: input.purchase_price,
            original_currency: input.original_currency,
            purchase_date: input.purchase_date,
            current_price: input.current_price,
            dividend_per_share: input.dividend_per_share,
            payment_months: normalize_months(&input.payment_months),
        }
    }

    /// Capital put in: shares × purchase price.
    pub fn cost_basis(&self) -> f64 {
        self.shares * self.purchase_price
    }

    /// Mark-to-market value: shares × current price.
    pub fn market_value(&self) -> f64 {
        self.shares * self.current_price
    }

    /// Expected dividend income per year for the whole position.
    pub fn annual_dividend(&self) -> f64 {
        self.shares * self.dividend_per_share
    }

    pub fn pays_in(&self, month: u8) -> bool {
        self.payment_months.contains(&month)
    }
}

/// User input for a new holding, already normalized to EUR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    pub ticker: String,
    pub name: String,
    pub shares: f64,
    pub purchase_price: f64,
    pub original_currency: Currency,
    pub purchase_date: NaiveDate,
    pub current_price: f64,
    pub dividend_per_share: f64,
    #[serde(default)]
    pub payment_months: Vec<u8>,
}

/// A purchase as entered against a looked-up quote.
///
/// `purchase_price` is in `selected_currency`; the quote carries whatever
/// currency the market data came back in. `CurrencyService::normalize_purchase`
/// turns this into a EUR `NewInvestment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub quote: StockQuote,
    pub shares: f64,
    pub purchase_price: f64,
    pub selected_currency: Currency,
    pub purchase_date: NaiveDate,
}

/// Keep only valid month indices (0–11), sorted and without duplicates.
pub fn normalize_months(months: &[u8]) -> Vec<u8> {
    let mut out: Vec<u8> = months.iter().copied().filter(|m| *m < 12).collect();
    out.sort_unstable();
    out.dedup();
    out
}
