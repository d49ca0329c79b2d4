//! Extraction of JSON payloads from free-form model output.
//!
//! Models wrap JSON in markdown fences, prepend a sentence, or append a
//! remark. These helpers strip that noise; anything still unparseable is a
//! `CoreError::MalformedResponse`.

use serde::de::DeserializeOwned;

use crate::errors::CoreError;

/// Remove every ```` ```json ```` and ```` ``` ```` marker and trim.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```JSON", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a JSON value of type `T` out of model output.
///
/// 1. Strip code fences and parse.
/// 2. Failing that, parse the outermost `{…}` span, then the outermost `[…]` span.
pub fn extract_json<T: DeserializeOwned>(provider: &str, raw: &str) -> Result<T, CoreError> {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return Err(CoreError::MalformedResponse {
            provider: provider.to_string(),
            message: "Empty response".into(),
        });
    }

    let first_error = match serde_json::from_str::<T>(&cleaned) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    for (open, close) in [('{', '}'), ('[', ']')] {
        if let Some(span) = outermost_span(&cleaned, open, close) {
            if let Ok(value) = serde_json::from_str::<T>(span) {
                return Ok(value);
            }
        }
    }

    let preview: String = raw.chars().take(200).collect();
    Err(CoreError::MalformedResponse {
        provider: provider.to_string(),
        message: format!("{first_error}. Raw: {preview}"),
    })
}

/// Slice from the first `open` to the last `close`, inclusive.
fn outermost_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}
