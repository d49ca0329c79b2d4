use thiserror::Error;

/// Unified error type for the entire lumina-finance-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration ───────────────────────────────────────────────
    #[error("AI service not configured — missing API key")]
    NotConfigured,

    // ── AI / Network ────────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Malformed response ({provider}): {message}")]
    MalformedResponse {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request to {provider} timed out after {seconds}s")]
    Timeout {
        provider: String,
        seconds: u64,
    },

    #[error("No market data found for ticker: {0}")]
    LookupNotFound(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors may carry the full request URL; drop the query string
        // so no credentials end up in logs or user-facing messages.
        let msg = e.to_string();
        CoreError::Network(redact_query(&msg))
    }
}

/// Replace everything after the first `?` with a redaction marker.
pub(crate) fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}
