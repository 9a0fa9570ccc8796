//! # Server Configuration
//!
//! This module contains the router, shared state and the serve loop for the
//! mentorship API.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;
use crate::services::AssignmentService;
use crate::store::SeaOrmStore;
use crate::telemetry::trace_context_middleware;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub assignments: AssignmentService,
}

impl AppState {
    /// Wires the SeaORM-backed store and the assignment service onto `db`.
    pub fn new(db: DatabaseConnection) -> Self {
        let store = Arc::new(SeaOrmStore::new(Arc::new(db.clone())));
        Self {
            db,
            assignments: AssignmentService::new(store),
        }
    }
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/mentors", post(handlers::mentors::create_mentor))
        .route(
            "/mentors/{mentor_id}/students",
            get(handlers::mentors::list_mentor_students),
        )
        .route("/students", post(handlers::students::create_student))
        .route(
            "/students/{student_id}/assign-mentor/{mentor_id}",
            post(handlers::students::assign_mentor),
        )
        .route(
            "/students/{student_id}/change-mentor/{mentor_id}",
            post(handlers::students::change_mentor),
        )
        .route(
            "/students/{student_id}/previous-mentor",
            get(handlers::students::previous_mentor),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_context_middleware))
}

/// Binds the configured address and serves until Ctrl-C
pub async fn run_server(config: AppConfig, db: DatabaseConnection) -> anyhow::Result<()> {
    let app = create_app(AppState::new(db));

    let addr = config
        .bind_addr()
        .with_context(|| format!("Invalid server address: {}", config.api_bind_addr))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, profile = %config.profile, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?error, "Failed to listen for shutdown signal");
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::mentors::create_mentor,
        crate::handlers::mentors::list_mentor_students,
        crate::handlers::students::create_student,
        crate::handlers::students::assign_mentor,
        crate::handlers::students::change_mentor,
        crate::handlers::students::previous_mentor,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::handlers::HealthStatus,
            crate::handlers::types::CreateMentorRequest,
            crate::handlers::types::CreateStudentRequest,
            crate::handlers::types::MentorResponse,
            crate::handlers::types::StudentResponse,
            crate::error::ApiError,
        )
    ),
    tags(
        (name = "root", description = "Service information and health"),
        (name = "mentors", description = "Mentor records"),
        (name = "students", description = "Student records and mentor assignment")
    ),
    info(
        title = "Mentorship API",
        description = "API for assigning mentors to students",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
