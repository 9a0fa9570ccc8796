//! Record store abstraction
//!
//! Defines the persistence primitives the assignment service is built on:
//! create, find-by-id, update, filtered find and the student -> mentor join.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::{mentor, student};
use crate::repositories::{MentorRepository, NewMentor, NewStudent, StudentRepository};

/// Persistence collaborator for mentor and student records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a mentor and return it with its generated id
    async fn insert_mentor(&self, mentor: NewMentor) -> Result<mentor::Model, RepositoryError>;

    async fn find_mentor(&self, id: Uuid) -> Result<Option<mentor::Model>, RepositoryError>;

    /// Insert a student (without mentor) and return it with its generated id
    async fn insert_student(&self, student: NewStudent)
    -> Result<student::Model, RepositoryError>;

    async fn find_student(&self, id: Uuid) -> Result<Option<student::Model>, RepositoryError>;

    /// Atomically overwrite a student's mentor reference.
    ///
    /// Returns `None` when the student does not exist.
    async fn set_student_mentor(
        &self,
        student_id: Uuid,
        mentor_id: Uuid,
    ) -> Result<Option<student::Model>, RepositoryError>;

    /// All students whose mentor reference equals `mentor_id`
    async fn find_students_by_mentor(
        &self,
        mentor_id: Uuid,
    ) -> Result<Vec<student::Model>, RepositoryError>;

    /// Student joined with the mentor it references, if any
    async fn find_student_with_mentor(
        &self,
        student_id: Uuid,
    ) -> Result<Option<(student::Model, Option<mentor::Model>)>, RepositoryError>;
}

/// [`RecordStore`] backed by a SeaORM connection pool
#[derive(Debug, Clone)]
pub struct SeaOrmStore {
    mentors: MentorRepository,
    students: StudentRepository,
}

impl SeaOrmStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            mentors: MentorRepository::new(db.clone()),
            students: StudentRepository::new(db),
        }
    }
}

#[async_trait]
impl RecordStore for SeaOrmStore {
    async fn insert_mentor(&self, mentor: NewMentor) -> Result<mentor::Model, RepositoryError> {
        self.mentors.create(mentor).await
    }

    async fn find_mentor(&self, id: Uuid) -> Result<Option<mentor::Model>, RepositoryError> {
        self.mentors.get_by_id(id).await
    }

    async fn insert_student(
        &self,
        student: NewStudent,
    ) -> Result<student::Model, RepositoryError> {
        self.students.create(student).await
    }

    async fn find_student(&self, id: Uuid) -> Result<Option<student::Model>, RepositoryError> {
        self.students.get_by_id(id).await
    }

    async fn set_student_mentor(
        &self,
        student_id: Uuid,
        mentor_id: Uuid,
    ) -> Result<Option<student::Model>, RepositoryError> {
        self.students.set_mentor(student_id, mentor_id).await
    }

    async fn find_students_by_mentor(
        &self,
        mentor_id: Uuid,
    ) -> Result<Vec<student::Model>, RepositoryError> {
        self.students.list_by_mentor(mentor_id).await
    }

    async fn find_student_with_mentor(
        &self,
        student_id: Uuid,
    ) -> Result<Option<(student::Model, Option<mentor::Model>)>, RepositoryError> {
        self.students.get_with_mentor(student_id).await
    }
}
