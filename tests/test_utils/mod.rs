//! Test utilities for database and HTTP testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, and for serving the API on an ephemeral port.

use anyhow::Result;
use mentorship::server::{AppState, create_app};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Sets up an in-memory SQLite database with all migrations applied and returns an Arc.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Serves the full router over a fresh database and returns its base URL.
#[allow(dead_code)]
pub async fn spawn_test_server() -> Result<String> {
    let db = setup_test_db().await?;
    let app = create_app(AppState::new(db));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(format!("http://{}", addr))
}
