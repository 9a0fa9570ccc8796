//! # Data Models
//!
//! This module contains the SeaORM entities and shared response types used
//! throughout the mentorship service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod mentor;
pub mod student;

pub use mentor::Entity as Mentor;
pub use student::Entity as Student;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "mentorship".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
