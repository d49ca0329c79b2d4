use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::market::{DeepStockAnalysis, GlobalIndices, NewsHeadline, StockQuote};
use crate::models::settings::{Settings, DEFAULT_TIMEOUT_SECS};
use crate::providers::gemini::GeminiProvider;
use crate::providers::parsing::extract_json;
use crate::providers::prompts;
use crate::providers::traits::{AiProvider, GenerationRequest};

/// Shown instead of advice when no API key is configured.
pub const NOT_CONFIGURED_MESSAGE: &str = "Error: API key not configured.";
/// Shown when the advisor request failed in transit.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error.";
/// Shown when the advisor returned no text.
pub const NO_ANSWER_MESSAGE: &str = "No answer.";

/// The application's view of the AI backend.
///
/// Every method absorbs failures: missing configuration, transport errors,
/// timeouts and unparseable output all come back as a sentinel (`None`, an
/// empty list, or a fixed message) and are logged, never propagated.
pub struct AiService {
    provider: Option<Box<dyn AiProvider>>,
    timeout: Duration,
}

impl AiService {
    /// Build from settings: a Gemini provider when an API key is present,
    /// otherwise an unconfigured service.
    pub fn from_settings(settings: &Settings) -> Self {
        let provider: Option<Box<dyn AiProvider>> = settings
            .api_key
            .as_ref()
            .filter(|k| !k.is_empty())
            .map(|key| {
                Box::new(GeminiProvider::with_timeout(
                    key.clone(),
                    settings.model.clone(),
                    settings.request_timeout(),
                )) as Box<dyn AiProvider>
            });

        Self {
            provider,
            timeout: settings.request_timeout(),
        }
    }

    /// Use a specific provider (alternate backend or test double).
    pub fn with_provider(provider: Box<dyn AiProvider>, timeout: Duration) -> Self {
        Self {
            provider: Some(provider),
            timeout,
        }
    }

    /// A service that answers every call with its "not configured" sentinel.
    pub fn unconfigured() -> Self {
        Self {
            provider: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    // ── Request shapes ──────────────────────────────────────────────

    /// Free-text answer to `question`, given the serialized financial context.
    pub async fn financial_advice(&self, question: &str, context: &str) -> String {
        match self.generate(&prompts::advice_request(question, context)).await {
            Ok(text) if text.trim().is_empty() => NO_ANSWER_MESSAGE.to_string(),
            Ok(text) => text,
            Err(CoreError::NotConfigured) => NOT_CONFIGURED_MESSAGE.to_string(),
            Err(e) => {
                log::warn!("Advisor request failed: {e}");
                CONNECTION_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Quote for one ticker, normalized. `None` on any failure.
    pub async fn fetch_quote(&self, ticker: &str) -> Option<StockQuote> {
        self.generate_json::<StockQuote>(&prompts::quote_request(ticker), "quote")
            .await
            .map(StockQuote::normalized)
    }

    /// Latest headlines; empty on any failure.
    pub async fn fetch_news(&self) -> Vec<NewsHeadline> {
        self.generate_json::<Vec<NewsHeadline>>(&prompts::news_request(), "news")
            .await
            .unwrap_or_default()
    }

    /// Index snapshot. `None` on any failure or when no index came back.
    pub async fn fetch_indices(&self) -> Option<GlobalIndices> {
        self.generate_json::<GlobalIndices>(&prompts::indices_request(), "indices")
            .await
            .filter(|indices| !indices.is_empty())
    }

    /// Multi-year fundamentals for one ticker. `None` on any failure.
    pub async fn deep_analysis(&self, ticker: &str) -> Option<DeepStockAnalysis> {
        self.generate_json::<DeepStockAnalysis>(&prompts::deep_analysis_request(ticker), "deep analysis")
            .await
    }

    // ── Internal ────────────────────────────────────────────────────

    /// One bounded round trip to the provider.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, CoreError> {
        let provider = self.provider.as_deref().ok_or(CoreError::NotConfigured)?;

        match tokio::time::timeout(self.timeout, provider.generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(CoreError::Timeout {
                provider: provider.name().to_string(),
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    /// Generate and parse JSON, collapsing every failure to `None`.
    async fn generate_json<T: DeserializeOwned>(&self, request: &GenerationRequest, what: &str) -> Option<T> {
        let text = match self.generate(request).await {
            Ok(text) => text,
            Err(CoreError::NotConfigured) => return None,
            Err(e) => {
                log::warn!("AI {what} request failed: {e}");
                return None;
            }
        };

        let provider = self.provider_name().unwrap_or("AI");
        match extract_json::<T>(provider, &text) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Discarding AI {what} response: {e}");
                None
            }
        }
    }
}
