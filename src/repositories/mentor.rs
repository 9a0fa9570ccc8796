//! Mentor repository for database operations
//!
//! This module provides the MentorRepository struct which encapsulates
//! SeaORM operations for the mentors table.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::mentor::{self, Entity as Mentor};

/// Field data for a new mentor; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMentor {
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Repository for mentor database operations
#[derive(Debug, Clone)]
pub struct MentorRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl MentorRepository {
    /// Creates a new MentorRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Inserts a mentor with a freshly generated id
    pub async fn create(&self, request: NewMentor) -> Result<mentor::Model, RepositoryError> {
        let now = Utc::now();

        let mentor = mentor::ActiveModel {
            id: Set(Uuid::new_v4()),
            external_id: Set(request.external_id),
            name: Set(request.name),
            email: Set(request.email),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        mentor
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Finds a mentor by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<mentor::Model>, RepositoryError> {
        Mentor::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }
}
