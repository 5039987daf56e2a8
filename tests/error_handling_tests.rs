//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows clients to handle specific cases

use axum::http::StatusCode;
use axum::response::IntoResponse;
use leadger::prelude::*;

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_record_not_found_returns_404() {
        let err = LeadgerError::Record(RecordError::NotFound {
            id: "201001".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_record_data_returns_400() {
        let err = LeadgerError::Record(RecordError::InvalidData {
            message: "expected an array".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_query_errors_return_400() {
        let err = LeadgerError::Query(QueryError::InvalidColumn { column: 9, width: 3 });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = LeadgerError::Query(QueryError::EmptySubjectCode);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_chat_not_configured_returns_503() {
        let err = LeadgerError::Chat(ChatError::NotConfigured);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_chat_upstream_failures_return_502() {
        for err in [
            ChatError::Transport("connection refused".to_string()),
            ChatError::Status(500),
            ChatError::Decode("missing field `answer`".to_string()),
        ] {
            assert_eq!(LeadgerError::Chat(err).status_code(), StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn test_empty_chat_message_returns_400() {
        let err = LeadgerError::Chat(ChatError::EmptyMessage);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_config_and_settings_errors_return_500() {
        let err = LeadgerError::Config(ConfigError::FileNotFound {
            path: "leadger.yaml".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = LeadgerError::Settings(SettingsError::Malformed {
            path: "settings.json".to_string(),
            message: "expected value".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_record_error_codes() {
        let err = LeadgerError::from(RecordError::NotFound { id: "1".to_string() });
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");

        let err = LeadgerError::from(RecordError::InvalidData {
            message: "bad".to_string(),
        });
        assert_eq!(err.error_code(), "INVALID_RECORD_DATA");
    }

    #[test]
    fn test_query_error_codes() {
        let err = LeadgerError::from(QueryError::InvalidColumn { column: 4, width: 2 });
        assert_eq!(err.error_code(), "INVALID_COLUMN");

        let err = LeadgerError::from(QueryError::EmptySubjectCode);
        assert_eq!(err.error_code(), "EMPTY_SUBJECT_CODE");
    }

    #[test]
    fn test_chat_error_codes() {
        assert_eq!(
            LeadgerError::from(ChatError::NotConfigured).error_code(),
            "CHAT_NOT_CONFIGURED"
        );
        assert_eq!(
            LeadgerError::from(ChatError::Status(404)).error_code(),
            "CHAT_UPSTREAM_STATUS"
        );
    }
}

// =============================================================================
// Error Response Format Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_error_response_has_code_and_message() {
        let err = LeadgerError::from(QueryError::EmptySubjectCode);
        let response = err.to_response();

        assert_eq!(response.code, "EMPTY_SUBJECT_CODE");
        assert!(response.message.contains("Subject code"));
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_includes_details_for_record_not_found() {
        let err = LeadgerError::from(RecordError::NotFound {
            id: "201001".to_string(),
        });
        let response = err.to_response();

        let details = response.details.unwrap();
        assert_eq!(details["id"], "201001");
    }

    #[test]
    fn test_error_response_includes_column_details() {
        let err = LeadgerError::from(QueryError::InvalidColumn { column: 7, width: 3 });
        let details = err.to_response().details.unwrap();

        assert_eq!(details["column"], 7);
        assert_eq!(details["width"], 3);
    }

    #[test]
    fn test_error_response_includes_upstream_status() {
        let err = LeadgerError::from(ChatError::Status(429));
        let details = err.to_response().details.unwrap();
        assert_eq!(details["upstream_status"], 429);
    }

    #[test]
    fn test_error_response_serializes_without_empty_details() {
        let err = LeadgerError::from(ChatError::NotConfigured);
        let json = serde_json::to_value(err.to_response()).unwrap();

        assert_eq!(json["code"], "CHAT_NOT_CONFIGURED");
        assert!(json.get("details").is_none());
    }
}

// =============================================================================
// Error Conversion Tests
// =============================================================================

mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_anyhow_error_converts_to_internal() {
        let err: LeadgerError = anyhow::anyhow!("Failed to acquire read lock").into();
        assert!(matches!(err, LeadgerError::Internal(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_settings_error_converts() {
        let err: LeadgerError = SettingsError::Io {
            path: "/root/settings.json".to_string(),
            message: "permission denied".to_string(),
        }
        .into();
        assert!(matches!(err, LeadgerError::Settings(SettingsError::Io { .. })));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error;

        let err = LeadgerError::from(ChatError::Status(500));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("500"));
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[test]
    fn test_can_match_specific_chat_errors() {
        let err = LeadgerError::from(ChatError::Status(503));

        match err {
            LeadgerError::Chat(ChatError::Status(code)) => assert_eq!(code, 503),
            _ => panic!("Expected ChatError::Status"),
        }
    }

    #[test]
    fn test_can_match_specific_record_errors() {
        let err = LeadgerError::from(RecordError::NotFound { id: "9".to_string() });

        match err {
            LeadgerError::Record(RecordError::NotFound { id }) => assert_eq!(id, "9"),
            _ => panic!("Expected RecordError::NotFound"),
        }
    }
}

// =============================================================================
// IntoResponse Tests
// =============================================================================

mod into_response_tests {
    use super::*;

    #[test]
    fn test_leadger_error_into_response_status() {
        let err = LeadgerError::from(RecordError::NotFound {
            id: "201001".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_chat_error_into_response_status() {
        let err = LeadgerError::from(ChatError::NotConfigured);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
