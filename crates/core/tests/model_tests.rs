// ═══════════════════════════════════════════════════════════════════
// Model Tests — Transaction, Investment, Budget, market data shapes,
// dividend calendar, Settings
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use lumina_finance_core::models::budget::{Budget, BudgetBreakdown, BudgetStatus};
use lumina_finance_core::models::dividends::{
    DividendCalendar, MonthlyDividend, ProjectionHorizon, MONTH_LABELS,
};
use lumina_finance_core::models::investment::{
    normalize_months, Currency, Investment, NewInvestment,
};
use lumina_finance_core::models::market::{
    DeepStockAnalysis, GlobalIndices, NewsHeadline, StockQuote,
};
use lumina_finance_core::models::session::Session;
use lumina_finance_core::models::settings::{
    Settings, API_KEY_VAR, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GEMINI_API_KEY_VAR, MODEL_VAR,
    TIMEOUT_VAR,
};
use lumina_finance_core::models::summary::PortfolioSummary;
use lumina_finance_core::models::transaction::{NewTransaction, Transaction, TransactionType};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn new_investment(ticker: &str) -> NewInvestment {
    NewInvestment {
        ticker: ticker.into(),
        name: "Test Corp".into(),
        shares: 10.0,
        purchase_price: 50.0,
        original_currency: Currency::Eur,
        purchase_date: d(2025, 1, 15),
        current_price: 60.0,
        dividend_per_share: 2.0,
        payment_months: vec![0, 6],
    }
}

// ═══════════════════════════════════════════════════════════════════
// Transaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn new_assigns_unique_ids() {
        let a = Transaction::new(NewTransaction::income("Salary", 1500.0, d(2025, 1, 1)));
        let b = Transaction::new(NewTransaction::income("Salary", 1500.0, d(2025, 1, 1)));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(
            NewTransaction::income("x", 1.0, d(2025, 1, 1)).kind,
            TransactionType::Income
        );
        assert_eq!(
            NewTransaction::expense("x", 1.0, d(2025, 1, 1)).kind,
            TransactionType::Expense
        );
        assert_eq!(
            NewTransaction::investment("x", 1.0, d(2025, 1, 1)).kind,
            TransactionType::Investment
        );
    }

    #[test]
    fn category_defaults_to_none() {
        let t = NewTransaction::expense("Coffee", 3.0, d(2025, 1, 2));
        assert!(t.category.is_none());
        let t = t.with_category("Ocio");
        assert_eq!(t.category.as_deref(), Some("Ocio"));
    }

    #[test]
    fn only_expenses_are_expenses() {
        let income = Transaction::new(NewTransaction::income("Salary", 1.0, d(2025, 1, 1)));
        let expense = Transaction::new(NewTransaction::expense("Rent", 1.0, d(2025, 1, 1)));
        let invest = Transaction::new(NewTransaction::investment("Buy", 1.0, d(2025, 1, 1)));
        assert!(!income.is_expense());
        assert!(expense.is_expense());
        assert!(!invest.is_expense());
    }

    #[test]
    fn serializes_kind_as_type_in_screaming_case() {
        let t = Transaction::new(NewTransaction::expense("Rent", 700.0, d(2025, 3, 1)));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["type"], "EXPENSE");
        assert_eq!(json["date"], "2025-03-01");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn deserializes_without_category() {
        let json = r#"{
            "id": "7f0c4a4e-9a43-4a53-8a0a-6b1a4c6a2f10",
            "description": "Salary",
            "amount": 1500.0,
            "type": "INCOME",
            "date": "2025-01-31"
        }"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.kind, TransactionType::Income);
        assert!(t.category.is_none());
    }

    #[test]
    fn display_kind() {
        assert_eq!(TransactionType::Investment.to_string(), "Investment");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Investment
// ═══════════════════════════════════════════════════════════════════

mod investment {
    use super::*;

    #[test]
    fn new_uppercases_ticker() {
        let inv = Investment::new(new_investment("  aapl "));
        assert_eq!(inv.ticker, "AAPL");
    }

    #[test]
    fn derived_values() {
        let inv = Investment::new(new_investment("KO"));
        assert_eq!(inv.cost_basis(), 500.0);
        assert_eq!(inv.market_value(), 600.0);
        assert_eq!(inv.annual_dividend(), 20.0);
    }

    #[test]
    fn pays_in() {
        let inv = Investment::new(new_investment("KO"));
        assert!(inv.pays_in(0));
        assert!(inv.pays_in(6));
        assert!(!inv.pays_in(3));
    }

    #[test]
    fn new_sanitizes_payment_months() {
        let mut input = new_investment("KO");
        input.payment_months = vec![9, 3, 3, 12, 0, 200];
        let inv = Investment::new(input);
        assert_eq!(inv.payment_months, vec![0, 3, 9]);
    }

    #[test]
    fn normalize_months_sorts_and_dedups() {
        assert_eq!(normalize_months(&[11, 0, 11, 5]), vec![0, 5, 11]);
        assert!(normalize_months(&[12, 13]).is_empty());
        assert!(normalize_months(&[]).is_empty());
    }

    #[test]
    fn currency_codes() {
        assert_eq!(Currency::Eur.code(), "EUR");
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::default(), Currency::Eur);
    }

    #[test]
    fn currency_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let c: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(c, Currency::Eur);
    }

    #[test]
    fn serializes_camel_case() {
        let inv = Investment::new(new_investment("KO"));
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["purchasePrice"], 50.0);
        assert_eq!(json["originalCurrency"], "EUR");
        assert_eq!(json["paymentMonths"], serde_json::json!([0, 6]));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Budget
// ═══════════════════════════════════════════════════════════════════

mod budget {
    use super::*;

    #[test]
    fn new_assigns_id() {
        let a = Budget::new("Ocio", 100.0);
        let b = Budget::new("Ocio", 100.0);
        assert_ne!(a.id, b.id);
        assert_eq!(a.category, "Ocio");
        assert_eq!(a.limit, 100.0);
    }

    #[test]
    fn status_display() {
        assert_eq!(BudgetStatus::Healthy.to_string(), "healthy");
        assert_eq!(BudgetStatus::Warning.to_string(), "warning");
        assert_eq!(BudgetStatus::Over.to_string(), "over");
    }

    #[test]
    fn breakdown_is_over() {
        let within = BudgetBreakdown {
            total_limit: 100.0,
            total_spent: 80.0,
            spent_within_limit: 80.0,
            remaining: 20.0,
            overspent: 0.0,
        };
        assert!(!within.is_over());

        let over = BudgetBreakdown {
            overspent: 5.0,
            ..within
        };
        assert!(over.is_over());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Market data
// ═══════════════════════════════════════════════════════════════════

mod market {
    use super::*;

    #[test]
    fn quote_parses_camel_case() {
        let json = r#"{
            "symbol": "aapl",
            "name": "Apple Inc.",
            "price": 190.5,
            "currency": "usd",
            "changePercent": -1.2,
            "annualDividend": 0.96,
            "paymentMonths": [1, 4, 7, 10]
        }"#;
        let q: StockQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.price, 190.5);
        assert_eq!(q.change_percent, -1.2);
        assert_eq!(q.payment_months, vec![1, 4, 7, 10]);

        let q = q.normalized();
        assert_eq!(q.symbol, "AAPL");
        assert_eq!(q.currency, "USD");
    }

    #[test]
    fn quote_missing_fields_default() {
        let q: StockQuote = serde_json::from_str(r#"{"symbol": "X"}"#).unwrap();
        assert_eq!(q.price, 0.0);
        assert_eq!(q.annual_dividend, 0.0);
        assert!(q.payment_months.is_empty());
        assert!(!q.has_price());
    }

    #[test]
    fn quote_lenient_months() {
        let json = r#"{"price": 1.0, "paymentMonths": [0, 2.0, 3.5, 12, -1, "x", 11]}"#;
        let q: StockQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.payment_months, vec![0, 2, 11]);

        let q: StockQuote = serde_json::from_str(r#"{"price": 1.0, "paymentMonths": null}"#).unwrap();
        assert!(q.payment_months.is_empty());
    }

    #[test]
    fn quote_null_numbers_read_as_zero() {
        let json = r#"{
            "symbol": "MSFT",
            "name": null,
            "price": 410.5,
            "currency": "USD",
            "changePercent": null,
            "annualDividend": null,
            "paymentMonths": [2, 5, 8, 11]
        }"#;
        let q: StockQuote = serde_json::from_str(json).unwrap();
        assert_eq!(q.price, 410.5);
        assert_eq!(q.change_percent, 0.0);
        assert_eq!(q.annual_dividend, 0.0);
        assert_eq!(q.name, "");
        assert!(q.has_price());
    }

    #[test]
    fn null_price_is_not_usable() {
        let q: StockQuote = serde_json::from_str(r#"{"symbol": "X", "price": null}"#).unwrap();
        assert_eq!(q.price, 0.0);
        assert!(!q.has_price());
    }

    #[test]
    fn headline_and_index_nulls() {
        let news: Vec<NewsHeadline> =
            serde_json::from_str(r#"[{"title": "Oil slips", "tag": null, "time": null}]"#).unwrap();
        assert_eq!(news[0].tag, "");

        let idx: GlobalIndices =
            serde_json::from_str(r#"{"sp500": {"price": null, "change": null}, "nasdaq": null}"#).unwrap();
        let sp = idx.sp500.unwrap();
        assert_eq!(sp.price, "");
        assert_eq!(sp.change, 0.0);
        assert!(idx.nasdaq.is_none());
    }

    #[test]
    fn deep_analysis_null_metrics() {
        let json = r#"{
            "symbol": "KO",
            "price": null,
            "metrics": {"pe": null, "fcfYield": 3.1, "dividendYield": null, "marketCap": null, "payoutRatio": null},
            "history": {"revenue": [{"year": 2022, "value": null}], "eps": null}
        }"#;
        let a: DeepStockAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(a.price, 0.0);
        assert_eq!(a.metrics.pe, 0.0);
        assert_eq!(a.metrics.fcf_yield, 3.1);
        assert_eq!(a.metrics.market_cap, "");
        assert_eq!(a.history.revenue[0].value, 0.0);
        assert!(a.history.eps.is_empty());
    }

    #[test]
    fn null_sections_read_as_empty() {
        let a: DeepStockAnalysis =
            serde_json::from_str(r#"{"symbol": "KO", "metrics": null, "history": null}"#).unwrap();
        assert_eq!(a.metrics.pe, 0.0);
        assert!(a.history.revenue.is_empty());
    }

    #[test]
    fn has_price_rejects_non_positive() {
        let mut q = StockQuote {
            price: 10.0,
            ..Default::default()
        };
        assert!(q.has_price());
        q.price = 0.0;
        assert!(!q.has_price());
        q.price = -3.0;
        assert!(!q.has_price());
        q.price = f64::NAN;
        assert!(!q.has_price());
    }

    #[test]
    fn normalized_clears_negative_dividend() {
        let q = StockQuote {
            price: 10.0,
            annual_dividend: -1.0,
            payment_months: vec![6, 6, 1],
            ..Default::default()
        }
        .normalized();
        assert_eq!(q.annual_dividend, 0.0);
        assert_eq!(q.payment_months, vec![1, 6]);
    }

    #[test]
    fn headlines_parse() {
        let json = r#"[{"title": "ECB holds rates", "tag": "Macro", "time": "2h ago"}, {"title": "Only title"}]"#;
        let news: Vec<NewsHeadline> = serde_json::from_str(json).unwrap();
        assert_eq!(news.len(), 2);
        assert_eq!(news[0].tag, "Macro");
        assert_eq!(news[1].time, "");
    }

    #[test]
    fn indices_accept_numeric_price() {
        let json = r#"{
            "sp500": {"price": "5,012.34 USD", "change": 0.4},
            "nasdaq": {"price": 17000.5, "change": -0.1}
        }"#;
        let idx: GlobalIndices = serde_json::from_str(json).unwrap();
        assert_eq!(idx.sp500.as_ref().unwrap().price, "5,012.34 USD");
        assert_eq!(idx.nasdaq.as_ref().unwrap().price, "17000.5");
        assert!(idx.ibex.is_none());
        assert!(!idx.is_empty());
        assert!(GlobalIndices::default().is_empty());
    }

    #[test]
    fn deep_analysis_parses_loose_years() {
        let json = r#"{
            "symbol": "KO",
            "name": "Coca-Cola",
            "price": 60.1,
            "currency": "USD",
            "description": "Beverages.",
            "metrics": {"pe": 24.0, "fcfYield": 3.1, "dividendYield": 3.0, "marketCap": 260, "payoutRatio": 70.0},
            "history": {
                "revenue": [{"year": 2021, "value": 38.7}, {"year": "TTM", "value": 45.0}],
                "eps": [{"year": "2021", "value": 2.25}]
            }
        }"#;
        let a: DeepStockAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(a.metrics.fcf_yield, 3.1);
        assert_eq!(a.metrics.market_cap, "260");
        assert_eq!(a.history.revenue[0].year, "2021");
        assert_eq!(a.history.revenue[1].year, "TTM");
        assert!(a.history.roic.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Dividend calendar / projection horizon
// ═══════════════════════════════════════════════════════════════════

mod dividends {
    use super::*;

    fn calendar(amounts: [f64; 12]) -> DividendCalendar {
        DividendCalendar {
            months: amounts
                .iter()
                .enumerate()
                .map(|(i, a)| MonthlyDividend {
                    month: i as u8,
                    label: MONTH_LABELS[i].to_string(),
                    amount: *a,
                })
                .collect(),
        }
    }

    #[test]
    fn totals_and_lookup() {
        let mut amounts = [0.0; 12];
        amounts[2] = 30.0;
        amounts[8] = 10.0;
        let cal = calendar(amounts);
        assert_eq!(cal.annual_total(), 40.0);
        assert_eq!(cal.amount_for(2), 30.0);
        assert_eq!(cal.amount_for(12), 0.0);
        assert_eq!(cal.amounts().len(), 12);
    }

    #[test]
    fn peak_never_below_one() {
        let cal = calendar([0.0; 12]);
        assert_eq!(cal.peak(), 1.0);
        assert_eq!(cal.relative_height(4), 0.0);
    }

    #[test]
    fn relative_height_scales_to_peak() {
        let mut amounts = [0.0; 12];
        amounts[0] = 50.0;
        amounts[1] = 25.0;
        let cal = calendar(amounts);
        assert_eq!(cal.relative_height(0), 100.0);
        assert_eq!(cal.relative_height(1), 50.0);
    }

    #[test]
    fn horizons() {
        assert_eq!(ProjectionHorizon::default(), ProjectionHorizon::Ten);
        let years: Vec<u32> = ProjectionHorizon::ALL.iter().map(|h| h.years()).collect();
        assert_eq!(years, vec![10, 25, 40]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Session / summary
// ═══════════════════════════════════════════════════════════════════

mod session {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let s = Session::new();
        assert!(s.transactions.is_empty());
        assert!(s.investments.is_empty());
        assert!(s.budgets.is_empty());
    }

    #[test]
    fn session_serializes_all_collections() {
        let mut s = Session::new();
        s.budgets.push(Budget::new("Food", 200.0));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["budgets"][0]["category"], "Food");
        assert_eq!(json["transactions"], serde_json::json!([]));
    }

    #[test]
    fn cash_balance_excludes_holdings() {
        let summary = PortfolioSummary {
            total_income: 2000.0,
            total_expenses: 300.0,
            investments_cash_out: 500.0,
            investments_value: 650.0,
            total_balance: 1850.0,
        };
        assert_eq!(summary.cash_balance(), 1200.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.api_key.is_none());
        assert_eq!(s.model, DEFAULT_MODEL);
        assert_eq!(s.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!s.is_ai_configured());
    }

    #[test]
    fn reads_all_variables() {
        let s = lookup(&[
            (API_KEY_VAR, "k-123"),
            (MODEL_VAR, "gemini-pro"),
            (TIMEOUT_VAR, "5"),
        ]);
        assert_eq!(s.api_key.as_deref(), Some("k-123"));
        assert_eq!(s.model, "gemini-pro");
        assert_eq!(s.request_timeout().as_secs(), 5);
        assert!(s.is_ai_configured());
    }

    #[test]
    fn falls_back_to_gemini_key() {
        let s = lookup(&[(GEMINI_API_KEY_VAR, "g-key")]);
        assert_eq!(s.api_key.as_deref(), Some("g-key"));

        let s = lookup(&[(API_KEY_VAR, "primary"), (GEMINI_API_KEY_VAR, "g-key")]);
        assert_eq!(s.api_key.as_deref(), Some("primary"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let s = lookup(&[(API_KEY_VAR, "   "), (MODEL_VAR, "")]);
        assert!(s.api_key.is_none());
        assert_eq!(s.model, DEFAULT_MODEL);
    }

    #[test]
    fn invalid_timeout_uses_default() {
        assert_eq!(lookup(&[(TIMEOUT_VAR, "abc")]).request_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(lookup(&[(TIMEOUT_VAR, "0")]).request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn debug_hides_api_key() {
        let s = Settings::with_api_key("super-secret");
        let dbg = format!("{s:?}");
        assert!(!dbg.contains("super-secret"));
        assert!(dbg.contains("<redacted>"));
    }
}
