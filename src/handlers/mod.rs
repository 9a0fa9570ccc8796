//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the mentorship service.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db;
use crate::error::{ApiError, ErrorType, validation_error};
use crate::models::ServiceInfo;
use crate::server::AppState;

pub mod mentors;
pub mod students;
pub mod types;

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    /// Always `ok` when the database answered
    pub status: String,
}

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Reports whether the database is reachable
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service healthy", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = ApiError)
    ),
    tag = "root"
)]
pub async fn healthz(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    db::health_check(&state.db).await.map_err(|error| {
        tracing::warn!(error = ?error, "Health check failed");
        ApiError::from(ErrorType::ServiceUnavailable)
    })?;

    Ok(Json(HealthStatus {
        status: "ok".to_string(),
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ErrorType::NotFound.into()
}

/// Parses a path segment as a record id, rejecting malformed values with a 400.
pub(crate) fn parse_id(raw: &str, field: &'static str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| {
        validation_error(
            &format!("Invalid {field}: expected a UUID"),
            serde_json::json!({ "field": field, "value": raw }),
        )
    })
}
