//! Student repository for database operations
//!
//! This module provides the StudentRepository struct which encapsulates
//! SeaORM operations for the students table, including the mentor join.

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::mentor::{self, Entity as Mentor};
use crate::models::student::{self, Entity as Student};

/// Field data for a new student; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub batch: Option<String>,
}

/// Repository for student database operations
#[derive(Debug, Clone)]
pub struct StudentRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl StudentRepository {
    /// Creates a new StudentRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Inserts a student with a freshly generated id and no mentor
    pub async fn create(&self, request: NewStudent) -> Result<student::Model, RepositoryError> {
        let now = Utc::now();

        let student = student::ActiveModel {
            id: Set(Uuid::new_v4()),
            external_id: Set(request.external_id),
            name: Set(request.name),
            email: Set(request.email),
            batch: Set(request.batch),
            mentor_id: Set(None),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        student
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Finds a student by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<student::Model>, RepositoryError> {
        Student::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Points a student at a mentor, overwriting any previous reference.
    ///
    /// The write is a single `UPDATE ... WHERE id = ?`. Returns `None` when no
    /// student row matched, otherwise the row as it reads after the update.
    pub async fn set_mentor(
        &self,
        student_id: Uuid,
        mentor_id: Uuid,
    ) -> Result<Option<student::Model>, RepositoryError> {
        let now: DateTimeWithTimeZone = Utc::now().into();

        let result = Student::update_many()
            .col_expr(student::Column::MentorId, Expr::value(mentor_id))
            .col_expr(student::Column::UpdatedAt, Expr::value(now))
            .filter(student::Column::Id.eq(student_id))
            .exec(&*self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let updated = self.get_by_id(student_id).await?.ok_or_else(|| {
            RepositoryError::NotFound(format!("Student '{}' vanished after update", student_id))
        })?;

        Ok(Some(updated))
    }

    /// Lists the students currently referencing `mentor_id`, oldest first
    pub async fn list_by_mentor(
        &self,
        mentor_id: Uuid,
    ) -> Result<Vec<student::Model>, RepositoryError> {
        Student::find()
            .filter(student::Column::MentorId.eq(mentor_id))
            .order_by_asc(student::Column::CreatedAt)
            .order_by_asc(student::Column::Id)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    /// Loads a student together with the mentor its reference resolves to
    pub async fn get_with_mentor(
        &self,
        student_id: Uuid,
    ) -> Result<Option<(student::Model, Option<mentor::Model>)>, RepositoryError> {
        Student::find_by_id(student_id)
            .find_also_related(Mentor)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }
}
