use crate::models::investment::{Currency, Investment, NewInvestment, PurchaseOrder};
use crate::models::market::StockQuote;

/// Fixed USD → EUR rate. 1 USD = 0.92 EUR.
pub const EXCHANGE_RATE_USD_TO_EUR: f64 = 0.92;

/// Normalizes prices and dividends to EUR, the storage unit for every monetary field.
///
/// There are no live FX lookups. USD is converted at a fixed rate; every other
/// code is taken as already being EUR. Quotes in GBP, JPY, CNY etc. are therefore
/// stored unconverted unless the holding is tracked in USD.
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Convert `amount` quoted in `source_currency` to EUR.
    /// E.g., to_eur(100.0, "USD") → 92.0; to_eur(100.0, "EUR") → 100.0
    pub fn to_eur(&self, amount: f64, source_currency: &str) -> f64 {
        if is_usd(source_currency) {
            amount * EXCHANGE_RATE_USD_TO_EUR
        } else {
            amount
        }
    }

    /// Convert an amount in one of the tracked currencies to EUR.
    pub fn currency_to_eur(&self, amount: f64, currency: Currency) -> f64 {
        self.to_eur(amount, currency.code())
    }

    /// Whether a quote's price needs the USD rate applied.
    ///
    /// True when the quote itself is in USD, or when the holding is tracked in
    /// USD and the quote does not explicitly say EUR.
    pub fn quote_needs_conversion(&self, quote_currency: &str, tracked: Currency) -> bool {
        is_usd(quote_currency) || (tracked == Currency::Usd && !is_eur(quote_currency))
    }

    /// Currency to pre-select when entering a purchase against `quote`.
    pub fn detected_currency(&self, quote: &StockQuote) -> Currency {
        if is_usd(&quote.currency) {
            Currency::Usd
        } else {
            Currency::Eur
        }
    }

    /// Turn a purchase entered against a quote into a EUR-denominated holding.
    ///
    /// - The price paid is converted only when it was entered in USD.
    /// - Current price and dividend follow `quote_needs_conversion`.
    pub fn normalize_purchase(&self, order: &PurchaseOrder) -> NewInvestment {
        let quote = &order.quote;
        let purchase_price = self.currency_to_eur(order.purchase_price, order.selected_currency);

        let (current_price, dividend_per_share) =
            if self.quote_needs_conversion(&quote.currency, order.selected_currency) {
                (
                    quote.price * EXCHANGE_RATE_USD_TO_EUR,
                    quote.annual_dividend * EXCHANGE_RATE_USD_TO_EUR,
                )
            } else {
                (quote.price, quote.annual_dividend)
            };

        NewInvestment {
            ticker: quote.symbol.clone(),
            name: quote.name.clone(),
            shares: order.shares,
            purchase_price,
            original_currency: order.selected_currency,
            purchase_date: order.purchase_date,
            current_price,
            dividend_per_share,
            payment_months: quote.payment_months.clone(),
        }
    }

    /// Apply a fresh quote to a holding.
    ///
    /// Returns `None` when the quote has no usable price, so the caller keeps
    /// the previous values. A dividend of 0 in the quote keeps the old dividend.
    pub fn apply_quote(&self, investment: &Investment, quote: &StockQuote) -> Option<Investment> {
        if !quote.has_price() {
            return None;
        }

        let convert = self.quote_needs_conversion(&quote.currency, investment.original_currency);
        let rate = if convert { EXCHANGE_RATE_USD_TO_EUR } else { 1.0 };

        let new_dividend = quote.annual_dividend * rate;

        let mut updated = investment.clone();
        updated.current_price = quote.price * rate;
        if new_dividend != 0.0 {
            updated.dividend_per_share = new_dividend;
        }
        Some(updated)
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}

fn is_usd(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case("USD")
}

fn is_eur(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case("EUR")
}
