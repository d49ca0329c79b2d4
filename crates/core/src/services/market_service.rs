use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::models::investment::Investment;
use crate::models::market::MarketOverview;
use crate::services::ai_service::AiService;
use crate::services::currency_service::CurrencyService;

/// What a portfolio refresh changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshReport {
    /// Holdings that received a new price
    pub updated: usize,

    /// Tickers whose lookup failed; their prior values were kept
    pub unchanged: Vec<String>,
}

/// Refreshed holdings plus the report, ready to be committed in one step.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    pub investments: Vec<Investment>,
    pub report: RefreshReport,
}

/// Orchestrates AI lookups that touch several requests at once.
pub struct MarketService {
    currency_service: CurrencyService,
}

impl MarketService {
    pub fn new() -> Self {
        Self {
            currency_service: CurrencyService::new(),
        }
    }

    /// Fetch a fresh quote for every holding concurrently and build the
    /// updated list once all requests have settled.
    ///
    /// Order is preserved. A holding whose lookup failed is returned as is.
    pub async fn refresh_investments(&self, ai: &AiService, investments: &[Investment]) -> RefreshOutcome {
        let quotes = join_all(investments.iter().map(|inv| ai.fetch_quote(&inv.ticker))).await;

        let mut report = RefreshReport::default();
        let refreshed = investments
            .iter()
            .zip(quotes)
            .map(|(inv, quote)| {
                match quote.and_then(|q| self.currency_service.apply_quote(inv, &q)) {
                    Some(updated) => {
                        report.updated += 1;
                        updated
                    }
                    None => {
                        report.unchanged.push(inv.ticker.clone());
                        inv.clone()
                    }
                }
            })
            .collect();

        log::info!(
            "Portfolio refresh: {} updated, {} unchanged",
            report.updated,
            report.unchanged.len()
        );

        RefreshOutcome {
            investments: refreshed,
            report,
        }
    }

    /// Indices and headlines, requested in parallel.
    pub async fn market_overview(&self, ai: &AiService) -> MarketOverview {
        let (indices, news) = tokio::join!(ai.fetch_indices(), ai.fetch_news());
        MarketOverview { indices, news }
    }
}

impl Default for MarketService {
    fn default() -> Self {
        Self::new()
    }
}
