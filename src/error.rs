//! # Error Handling
//!
//! This module provides unified error handling for the mentorship service,
//! rendering every failure as a JSON body of the form
//! `{"error": "...", "code": "...", "trace_id": "..."}` with trace ID propagation.

use axum::{
    extract::rejection::JsonRejection,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::services::AssignmentError;
use crate::telemetry;

/// Unified API error response structure
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    /// HTTP status code for the response
    #[serde(skip_serializing, skip_deserializing)]
    pub status: StatusCode,
    /// Human-readable error message
    #[serde(rename = "error")]
    pub message: Box<str>,
    /// Error code for programmatic handling
    pub code: Box<str>,
    /// Additional error details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Box<serde_json::Value>>,
    /// Correlation trace ID for debugging (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub trace_id: Option<Box<str>>,
}

impl ApiError {
    /// Create a new API error with the given status code and message
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into().into_boxed_str(),
            code: code.into().into_boxed_str(),
            details: None,
            trace_id: Self::current_trace_id(),
        }
    }

    /// Add details to the error
    pub fn with_details<V: Into<serde_json::Value>>(mut self, details: V) -> Self {
        self.details = Some(Box::new(details.into()));
        self
    }

    /// Extract current trace ID from the active request (falls back to generated correlation ID)
    fn current_trace_id() -> Option<Box<str>> {
        telemetry::current_trace_id()
            .map(|trace_id| trace_id.into_boxed_str())
            .or_else(|| {
                let correlation = uuid::Uuid::new_v4().simple().to_string();
                Some(format!("corr-{}", &correlation[..8]).into_boxed_str())
            })
    }
}

/// Standard error types with predefined status codes
#[derive(Debug, Error)]
pub enum ErrorType {
    #[error("Not Found")]
    NotFound,
    #[error("Service Unavailable")]
    ServiceUnavailable,
}

impl ErrorType {
    /// Get the appropriate HTTP status code for this error type
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code string for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ErrorType::NotFound => "NOT_FOUND",
            ErrorType::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }
}

/// Errors raised by the repository layer
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("{0}")]
    NotFound(String),
}

impl RepositoryError {
    /// Wrap a SeaORM error, for use with `map_err`
    pub fn database_error(error: sea_orm::DbErr) -> Self {
        Self::Database(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        (self.status, headers, axum::Json(self)).into_response()
    }
}

impl From<ErrorType> for ApiError {
    fn from(error_type: ErrorType) -> Self {
        Self::new(
            error_type.status_code(),
            error_type.error_code(),
            error_type.to_string(),
        )
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err),
            JsonRejection::MissingJsonContentType(_) => {
                "Missing 'Content-Type: application/json' header".to_string()
            }
            _ => "Invalid request body".to_string(),
        };

        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message)
    }
}

/// Map an assignment service error onto an HTTP error.
///
/// Not-found conditions carry their own message. Store failures are reported
/// with `failure_message`, which differs per endpoint; the underlying cause is
/// logged but never returned to the caller.
pub fn assignment_error(error: AssignmentError, failure_message: &str) -> ApiError {
    match error {
        AssignmentError::MentorNotFound(mentor_id) => {
            ApiError::new(StatusCode::NOT_FOUND, "MENTOR_NOT_FOUND", "Mentor not found.")
                .with_details(serde_json::json!({ "mentor_id": mentor_id }))
        }
        AssignmentError::StudentNotFound(student_id) => {
            ApiError::new(StatusCode::NOT_FOUND, "STUDENT_NOT_FOUND", "Student not found.")
                .with_details(serde_json::json!({ "student_id": student_id }))
        }
        AssignmentError::CreateFailed { entity, source } => {
            tracing::error!(entity, error = ?source, "Record creation failed");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "CREATE_FAILED",
                failure_message,
            )
        }
        AssignmentError::AssignFailed(source) => {
            tracing::error!(error = ?source, "Mentor assignment failed");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "ASSIGN_FAILED",
                failure_message,
            )
        }
        AssignmentError::LookupFailed(source) => {
            tracing::error!(error = ?source, "Lookup failed");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "LOOKUP_FAILED",
                failure_message,
            )
        }
    }
}

/// Create a validation error with field details
pub fn validation_error(message: &str, field_errors: serde_json::Value) -> ApiError {
    ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message).with_details(field_errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use uuid::Uuid;

    fn store_failure() -> RepositoryError {
        RepositoryError::Database(sea_orm::DbErr::Custom("disk on fire".to_string()))
    }

    #[test]
    fn test_api_error_basic() {
        let error = ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            "Test error message",
        );

        assert_eq!(error.code, Box::from("VALIDATION_FAILED"));
        assert_eq!(error.message, Box::from("Test error message"));
        assert_eq!(error.details, None);
    }

    #[test]
    fn test_api_error_serializes_message_as_error_field() {
        let error = ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "CREATE_FAILED",
            "Unable to create mentor.",
        );

        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["error"], "Unable to create mentor.");
        assert_eq!(value["code"], "CREATE_FAILED");
        assert!(value.get("status").is_none());
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_error_type_mapping() {
        let not_found_error: ApiError = ErrorType::NotFound.into();
        assert_eq!(not_found_error.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found_error.code, Box::from("NOT_FOUND"));
        assert_eq!(not_found_error.message, Box::from("Not Found"));
    }

    #[test]
    fn test_content_type_header() {
        let error = ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", "Test error");

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_trace_id_generation() {
        let error = ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "Test error",
        );

        // Outside a request scope a correlation id is generated
        let trace_id = error.trace_id.unwrap();
        assert!(trace_id.starts_with("corr-"));
        assert_eq!(trace_id.len(), 13);
    }

    #[tokio::test]
    async fn test_trace_id_taken_from_request_context() {
        let context = telemetry::TraceContext {
            trace_id: "trace-abc".to_string(),
        };

        let error = telemetry::with_trace_context(context, async {
            ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", "missing")
        })
        .await;

        assert_eq!(error.trace_id.as_deref(), Some("trace-abc"));
    }

    #[test]
    fn test_mentor_not_found_maps_to_404() {
        let mentor_id = Uuid::new_v4();
        let error = assignment_error(
            AssignmentError::MentorNotFound(mentor_id),
            "Unable to assign mentor.",
        );

        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.code, Box::from("MENTOR_NOT_FOUND"));
        assert_eq!(error.message, Box::from("Mentor not found."));
        assert_eq!(
            error.details,
            Some(Box::new(json!({ "mentor_id": mentor_id })))
        );
    }

    #[test]
    fn test_student_not_found_maps_to_404() {
        let error = assignment_error(
            AssignmentError::StudentNotFound(Uuid::new_v4()),
            "Unable to fetch previous mentor.",
        );

        assert_eq!(error.status, StatusCode::NOT_FOUND);
        assert_eq!(error.code, Box::from("STUDENT_NOT_FOUND"));
    }

    #[test]
    fn test_store_failures_hide_cause() {
        let cases = [
            (
                AssignmentError::CreateFailed {
                    entity: "mentor",
                    source: store_failure(),
                },
                "CREATE_FAILED",
                "Unable to create mentor.",
            ),
            (
                AssignmentError::AssignFailed(store_failure()),
                "ASSIGN_FAILED",
                "Unable to assign/change mentor.",
            ),
            (
                AssignmentError::LookupFailed(store_failure()),
                "LOOKUP_FAILED",
                "Unable to fetch students.",
            ),
        ];

        for (error, code, message) in cases {
            let api_error = assignment_error(error, message);
            assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(api_error.code.as_ref(), code);
            assert_eq!(api_error.message.as_ref(), message);
            assert!(api_error.details.is_none());
            assert!(!api_error.message.contains("disk on fire"));
        }
    }

    #[test]
    fn test_validation_error_with_details() {
        let field_errors = json!({ "field": "studentId" });

        let validation_error = validation_error("Invalid identifier", field_errors.clone());

        assert_eq!(validation_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation_error.code, Box::from("VALIDATION_FAILED"));
        assert_eq!(validation_error.details, Some(Box::new(field_errors)));
    }
}
