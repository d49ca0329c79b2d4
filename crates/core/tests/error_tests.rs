// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use lumina_finance_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn not_configured() {
        let err = CoreError::NotConfigured;
        assert_eq!(
            err.to_string(),
            "AI service not configured — missing API key"
        );
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "Gemini".into(),
            message: "Rate limit or quota exceeded".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (Gemini): Rate limit or quota exceeded"
        );
    }

    #[test]
    fn malformed_response() {
        let err = CoreError::MalformedResponse {
            provider: "Gemini".into(),
            message: "Empty response".into(),
        };
        assert_eq!(err.to_string(), "Malformed response (Gemini): Empty response");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn timeout() {
        let err = CoreError::Timeout {
            provider: "Gemini".into(),
            seconds: 30,
        };
        assert_eq!(err.to_string(), "Request to Gemini timed out after 30s");
    }

    #[test]
    fn lookup_not_found() {
        let err = CoreError::LookupNotFound("ZZZZ".into());
        assert_eq!(err.to_string(), "No market data found for ticker: ZZZZ");
    }

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("Ticker must not be empty".into());
        assert_eq!(err.to_string(), "Validation failed: Ticker must not be empty");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("bad session".into());
        assert_eq!(err.to_string(), "Serialization error: bad session");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("expected value".into());
        assert_eq!(err.to_string(), "Deserialization error: expected value");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
        assert!(err.to_string().starts_with("Deserialization error: "));
    }

    #[test]
    fn question_mark_propagates_serde_errors() {
        fn parse(raw: &str) -> Result<serde_json::Value, CoreError> {
            Ok(serde_json::from_str(raw)?)
        }
        assert!(parse("[1, 2]").is_ok());
        assert!(matches!(parse("[1,"), Err(CoreError::Deserialization(_))));
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&CoreError::NotConfigured);
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoreError>();
    }

    #[test]
    fn debug_names_the_variant() {
        let err = CoreError::LookupNotFound("AAPL".into());
        assert!(format!("{err:?}").contains("LookupNotFound"));
    }
}
