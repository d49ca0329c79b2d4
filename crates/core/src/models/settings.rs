use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the generative-AI API key.
pub const API_KEY_VAR: &str = "API_KEY";
/// Alternative name accepted when `API_KEY` is unset.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "LUMINA_AI_MODEL";
pub const TIMEOUT_VAR: &str = "LUMINA_AI_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration, read once at startup.
#[derive(Clone, Serialize, Deserialize)]
pub struct Settings {
    /// API key for the AI backend. `None` disables every AI call.
    pub api_key: Option<String>,

    /// Model identifier passed to the AI backend.
    pub model: String,

    /// Upper bound for a single AI request, in seconds.
    pub request_timeout_secs: u64,
}

// Hand-written so the key never shows up in debug output.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load a `.env` file if one exists, then read the environment.
    pub fn load() -> Self {
        if let Err(e) = dotenv::dotenv() {
            log::debug!("No .env file loaded: {e}");
        }
        Self::from_env()
    }

    /// Read settings from process environment variables only.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup (used by `from_env`; handy in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = non_empty(API_KEY_VAR).or_else(|| non_empty(GEMINI_API_KEY_VAR));
        let model = non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let request_timeout_secs = non_empty(TIMEOUT_VAR)
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_key,
            model,
            request_timeout_secs,
        }
    }

    /// Settings with an API key and defaults for everything else.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn is_ai_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
