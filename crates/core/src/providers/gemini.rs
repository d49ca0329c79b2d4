use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::settings::DEFAULT_TIMEOUT_SECS;
use super::traits::{AiProvider, GenerationRequest};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const PROVIDER: &str = "Gemini";

/// Google Gemini `generateContent` provider.
///
/// - **Requires**: API key, sent in the `x-goog-api-key` header (never in the URL).
/// - **Search**: when requested, enables the `google_search` grounding tool.
/// - **Output**: concatenated text parts of the first candidate.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_timeout(api_key, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let builder = Client::builder().timeout(timeout);
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{BASE_URL}/{}:generateContent", self.model)
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

// ── Gemini API request/response types ───────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Build the JSON body for a `generateContent` call.
pub fn build_request_body(request: &GenerationRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: request.prompt.clone(),
            }],
        }],
        system_instruction: request.system_instruction.as_ref().map(|text| Content {
            role: None,
            parts: vec![Part { text: text.clone() }],
        }),
        tools: if request.use_search {
            vec![Tool {
                google_search: serde_json::Map::new(),
            }]
        } else {
            Vec::new()
        },
    }
}

/// Pull the generated text out of a raw `generateContent` response body.
/// A response with no candidates yields an empty string.
pub fn parse_response_body(body: &str) -> Result<String, CoreError> {
    let resp: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| CoreError::MalformedResponse {
            provider: PROVIDER.into(),
            message: format!("Failed to parse generateContent response: {e}"),
        })?;

    let text = resp
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .map(|parts| {
            parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    Ok(text)
}

/// Map a non-success HTTP status to a `CoreError`.
pub fn status_error(status: u16, body: &str) -> CoreError {
    let message = match status {
        401 | 403 => "Invalid or unauthorized API key".to_string(),
        404 => "Model not found".to_string(),
        429 => "Rate limit or quota exceeded".to_string(),
        500..=599 => format!("Server error (HTTP {status})"),
        _ => {
            let snippet: String = body.chars().take(200).collect();
            format!("HTTP {status}: {snippet}")
        }
    };
    CoreError::Api {
        provider: PROVIDER.into(),
        message,
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, CoreError> {
        let body = build_request_body(request);
        log::debug!(
            "Sending Gemini request (model: {}, search: {})",
            self.model,
            request.use_search
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status.as_u16(), &text));
        }

        parse_response_body(&text)
    }
}
