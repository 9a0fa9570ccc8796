//! # Mentorship API Library
//!
//! This library provides the core functionality for the mentorship service:
//! records for mentors and students, the assignment service, and the HTTP
//! layer exposing them.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod store;
pub mod telemetry;
pub use migration;
