pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::Datelike;
use models::{
    analytics::{AllocationSlice, PortfolioPerformance},
    budget::{Budget, BudgetOverview},
    dividends::{DividendCalendar, DividendProjection, ProjectionHorizon},
    investment::{Investment, NewInvestment, PurchaseOrder},
    market::{DeepStockAnalysis, MarketOverview, StockQuote},
    session::Session,
    settings::Settings,
    summary::PortfolioSummary,
    transaction::{NewTransaction, Transaction, TransactionType},
};
use providers::traits::AiProvider;
use services::{
    ai_service::AiService, budget_service::BudgetService, currency_service::CurrencyService,
    dividend_service::DividendService, ledger_service::LedgerService,
    market_service::{MarketService, RefreshReport}, portfolio_service::PortfolioService,
};
use uuid::Uuid;

use errors::CoreError;

/// Category recorded on the cash-out transaction of every purchase.
pub const INVESTMENT_CATEGORY: &str = "Investment";

/// Main entry point for the Lumina Finance core library.
/// Holds the in-memory session and all services needed to operate on it.
#[must_use]
pub struct FinanceDashboard {
    session: Session,
    ai_service: AiService,
    currency_service: CurrencyService,
    portfolio_service: PortfolioService,
    dividend_service: DividendService,
    budget_service: BudgetService,
    ledger_service: LedgerService,
    market_service: MarketService,
    /// Bumped on every mutation; callers may key memoized views on it.
    revision: u64,
}

impl std::fmt::Debug for FinanceDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceDashboard")
            .field("transactions", &self.session.transactions.len())
            .field("investments", &self.session.investments.len())
            .field("budgets", &self.session.budgets.len())
            .field("ai_configured", &self.ai_service.is_configured())
            .field("revision", &self.revision)
            .finish()
    }
}

impl FinanceDashboard {
    /// Create an empty session. The AI backend is enabled when `settings` carries an API key.
    pub fn new(settings: Settings) -> Self {
        Self::build(AiService::from_settings(&settings))
    }

    /// Create an empty session configured from `.env` and the process environment.
    pub fn from_env() -> Self {
        Self::new(Settings::load())
    }

    /// Create an empty session backed by a specific AI provider.
    pub fn with_provider(provider: Box<dyn AiProvider>, settings: &Settings) -> Self {
        Self::build(AiService::with_provider(provider, settings.request_timeout()))
    }

    // ── Ledger ──────────────────────────────────────────────────────

    /// Record an income, expense or investment movement.
    pub fn add_transaction(&mut self, input: NewTransaction) -> Result<Uuid, CoreError> {
        let input = validate_transaction(input)?;
        let transaction = Transaction::new(input);
        let id = transaction.id;
        self.session.transactions.push(transaction);
        self.touch();
        Ok(id)
    }

    /// All transactions in the order they were recorded.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.session.transactions
    }

    /// Transactions newest-first, for display.
    #[must_use]
    pub fn recent_transactions(&self) -> Vec<&Transaction> {
        self.session.transactions.iter().rev().collect()
    }

    /// Income, expenses, and balance including the market value of holdings.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.ledger_service
            .summarize(&self.session.transactions, &self.session.investments)
    }

    /// Text snapshot of the finances, as sent to the advisor.
    #[must_use]
    pub fn financial_context(&self) -> String {
        self.ledger_service
            .financial_context(&self.summary(), &self.session.investments)
    }

    // ── Budgets ─────────────────────────────────────────────────────

    /// Create a monthly limit for an expense category.
    pub fn add_budget(&mut self, category: &str, limit: f64) -> Result<Uuid, CoreError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(CoreError::ValidationError("Budget category must not be empty".into()));
        }
        if !limit.is_finite() || limit <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Budget limit must be a positive amount, got {limit}"
            )));
        }

        let budget = Budget::new(category, limit);
        let id = budget.id;
        self.session.budgets.push(budget);
        self.touch();
        Ok(id)
    }

    #[must_use]
    pub fn budgets(&self) -> &[Budget] {
        &self.session.budgets
    }

    /// Categories offered when entering a transaction: one per budget, first occurrence wins.
    #[must_use]
    pub fn category_suggestions(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.session
            .budgets
            .iter()
            .map(|b| b.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Spending per category, per-budget status and the global breakdown.
    #[must_use]
    pub fn budget_overview(&self) -> BudgetOverview {
        self.budget_service
            .overview(&self.session.budgets, &self.session.transactions)
    }

    // ── Investments ─────────────────────────────────────────────────

    /// Record a holding (prices already in EUR) and the cash that funded it.
    pub fn add_investment(&mut self, input: NewInvestment) -> Result<Uuid, CoreError> {
        validate_investment(&input)?;

        let investment = Investment::new(input);
        let funding = NewTransaction::new(
            format!("Purchase {}", investment.ticker),
            investment.cost_basis(),
            TransactionType::Investment,
            investment.purchase_date,
        )
        .with_category(INVESTMENT_CATEGORY);

        let id = investment.id;
        // Push the holding and its cash-out together; neither can fail past validation.
        self.session.investments.push(investment);
        self.session.transactions.push(Transaction::new(funding));
        self.touch();
        Ok(id)
    }

    /// Normalize a purchase entered against a quote to EUR and record it.
    pub fn purchase(&mut self, order: PurchaseOrder) -> Result<Uuid, CoreError> {
        if !order.quote.has_price() {
            return Err(CoreError::LookupNotFound(order.quote.symbol.clone()));
        }
        let input = self.currency_service.normalize_purchase(&order);
        self.add_investment(input)
    }

    #[must_use]
    pub fn investments(&self) -> &[Investment] {
        &self.session.investments
    }

    /// Invested capital, market value, P/L and dividend yields.
    #[must_use]
    pub fn performance(&self) -> PortfolioPerformance {
        self.portfolio_service.performance(&self.session.investments)
    }

    /// Market value per ticker with allocation percentages.
    #[must_use]
    pub fn allocation(&self) -> Vec<AllocationSlice> {
        self.portfolio_service.allocation(&self.session.investments)
    }

    /// Expected dividend income per calendar month.
    #[must_use]
    pub fn dividend_calendar(&self) -> DividendCalendar {
        self.dividend_service.monthly_schedule(&self.session.investments)
    }

    /// Current annual dividends compounded forward from this year.
    #[must_use]
    pub fn dividend_projection(&self, horizon: ProjectionHorizon) -> DividendProjection {
        let current = self.performance().total_dividends;
        let start_year = chrono::Utc::now().year();
        self.dividend_service.project_horizon(current, horizon, start_year)
    }

    // ── AI assistant ────────────────────────────────────────────────

    /// Whether an AI backend is configured.
    #[must_use]
    pub fn is_ai_configured(&self) -> bool {
        self.ai_service.is_configured()
    }

    /// Ask the advisor a question about the current finances.
    ///
    /// Only an empty question is an error; backend problems come back as a
    /// fixed message in place of the answer.
    pub async fn ask_advisor(&self, question: &str) -> Result<String, CoreError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(CoreError::ValidationError("Question must not be empty".into()));
        }
        let context = self.financial_context();
        Ok(self.ai_service.financial_advice(question, &context).await)
    }

    /// Look up a ticker before buying it.
    pub async fn lookup_quote(&self, ticker: &str) -> Result<StockQuote, CoreError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(CoreError::ValidationError("Ticker must not be empty".into()));
        }
        match self.ai_service.fetch_quote(ticker).await {
            Some(quote) if quote.has_price() => Ok(quote),
            _ => Err(CoreError::LookupNotFound(ticker.to_uppercase())),
        }
    }

    /// Refresh current prices and dividends of every holding.
    ///
    /// All lookups run concurrently; the investment list is swapped in one step
    /// once they have all settled. Holdings whose lookup failed keep their values.
    pub async fn refresh_portfolio(&mut self) -> RefreshReport {
        if self.session.investments.is_empty() {
            return RefreshReport::default();
        }

        let outcome = self
            .market_service
            .refresh_investments(&self.ai_service, &self.session.investments)
            .await;

        if outcome.report.updated > 0 {
            self.session.investments = outcome.investments;
            self.touch();
        }
        outcome.report
    }

    /// Index snapshot and headlines.
    pub async fn market_overview(&self) -> MarketOverview {
        self.market_service.market_overview(&self.ai_service).await
    }

    /// Fundamentals for one ticker.
    pub async fn deep_analysis(&self, ticker: &str) -> Result<DeepStockAnalysis, CoreError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(CoreError::ValidationError("Ticker must not be empty".into()));
        }
        self.ai_service
            .deep_analysis(ticker)
            .await
            .ok_or_else(|| CoreError::LookupNotFound(ticker.to_uppercase()))
    }

    // ── Session ─────────────────────────────────────────────────────

    /// Counter bumped on every change to the session.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Export the whole session as JSON (debugging/display; nothing is persisted).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.session)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize session: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(ai_service: AiService) -> Self {
        Self {
            session: Session::new(),
            ai_service,
            currency_service: CurrencyService::new(),
            portfolio_service: PortfolioService::new(),
            dividend_service: DividendService::new(),
            budget_service: BudgetService::new(),
            ledger_service: LedgerService::new(),
            market_service: MarketService::new(),
            revision: 0,
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

/// Rules:
/// - Description must not be blank
/// - Amount must be positive and finite
/// - A blank category is stored as no category
fn validate_transaction(mut input: NewTransaction) -> Result<NewTransaction, CoreError> {
    input.description = input.description.trim().to_string();
    if input.description.is_empty() {
        return Err(CoreError::ValidationError("Transaction description must not be empty".into()));
    }
    if !input.amount.is_finite() || input.amount <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "Transaction amount must be positive, got {}",
            input.amount
        )));
    }
    input.category = input
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());
    Ok(input)
}

fn validate_investment(input: &NewInvestment) -> Result<(), CoreError> {
    if input.ticker.trim().is_empty() {
        return Err(CoreError::ValidationError("Ticker must not be empty".into()));
    }
    if !input.shares.is_finite() || input.shares <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "Share count must be positive, got {}",
            input.shares
        )));
    }
    let prices = [
        ("Purchase price", input.purchase_price),
        ("Current price", input.current_price),
        ("Dividend per share", input.dividend_per_share),
    ];
    for (label, value) in prices {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "{label} must be a non-negative amount, got {value}"
            )));
        }
    }
    Ok(())
}
