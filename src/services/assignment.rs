//! # Assignment Service
//!
//! Mediates every mutation and query touching the mentor-student relationship.
//! The one business rule lives here: a mentor must exist before a student can
//! reference it. A student's mentor is either unassigned or assigned to a
//! single mentor; assigning again simply overwrites the reference.

use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::{mentor, student};
use crate::repositories::{NewMentor, NewStudent};
use crate::store::RecordStore;

/// Failures surfaced by [`AssignmentService`]
#[derive(Debug, Error)]
pub enum AssignmentError {
    #[error("unable to create {entity}")]
    CreateFailed {
        entity: &'static str,
        #[source]
        source: RepositoryError,
    },
    #[error("mentor {0} not found")]
    MentorNotFound(Uuid),
    #[error("student {0} not found")]
    StudentNotFound(Uuid),
    #[error("unable to assign mentor")]
    AssignFailed(#[source] RepositoryError),
    #[error("unable to look up records")]
    LookupFailed(#[source] RepositoryError),
}

/// Service owning the mentor-student assignment rules
#[derive(Clone)]
pub struct AssignmentService {
    store: Arc<dyn RecordStore>,
}

impl AssignmentService {
    /// Creates a service on top of the given store handle
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Creates a mentor from whatever subset of fields was supplied
    pub async fn create_mentor(&self, data: NewMentor) -> Result<mentor::Model, AssignmentError> {
        let mentor = self
            .store
            .insert_mentor(data)
            .await
            .map_err(|source| AssignmentError::CreateFailed {
                entity: "mentor",
                source,
            })?;

        counter!("mentors_created_total").increment(1);
        tracing::info!(mentor_id = %mentor.id, "Mentor created");
        Ok(mentor)
    }

    /// Creates a student with no mentor assigned
    pub async fn create_student(
        &self,
        data: NewStudent,
    ) -> Result<student::Model, AssignmentError> {
        let student = self
            .store
            .insert_student(data)
            .await
            .map_err(|source| AssignmentError::CreateFailed {
                entity: "student",
                source,
            })?;

        counter!("students_created_total").increment(1);
        tracing::info!(student_id = %student.id, "Student created");
        Ok(student)
    }

    /// Assigns (or reassigns) `mentor_id` to the student.
    ///
    /// The mentor is checked first; if it does not exist the student row is
    /// left untouched. Any previous mentor reference is overwritten.
    pub async fn assign_mentor(
        &self,
        student_id: Uuid,
        mentor_id: Uuid,
    ) -> Result<student::Model, AssignmentError> {
        let mentor = self
            .store
            .find_mentor(mentor_id)
            .await
            .map_err(AssignmentError::AssignFailed)?;

        if mentor.is_none() {
            counter!("mentor_assignments_total", "outcome" => "mentor_not_found").increment(1);
            tracing::debug!(%student_id, %mentor_id, "Assignment rejected, mentor missing");
            return Err(AssignmentError::MentorNotFound(mentor_id));
        }

        let student = self
            .store
            .set_student_mentor(student_id, mentor_id)
            .await
            .map_err(AssignmentError::AssignFailed)?
            .ok_or_else(|| {
                counter!("mentor_assignments_total", "outcome" => "student_not_found")
                    .increment(1);
                AssignmentError::StudentNotFound(student_id)
            })?;

        counter!("mentor_assignments_total", "outcome" => "assigned").increment(1);
        tracing::info!(%student_id, %mentor_id, "Mentor assigned");
        Ok(student)
    }

    /// Students currently assigned to `mentor_id`; empty for unknown mentors
    pub async fn list_students_for_mentor(
        &self,
        mentor_id: Uuid,
    ) -> Result<Vec<student::Model>, AssignmentError> {
        self.store
            .find_students_by_mentor(mentor_id)
            .await
            .map_err(AssignmentError::LookupFailed)
    }

    /// The mentor the student currently references, `None` when unassigned
    pub async fn get_assigned_mentor(
        &self,
        student_id: Uuid,
    ) -> Result<Option<mentor::Model>, AssignmentError> {
        let (_, mentor) = self
            .store
            .find_student_with_mentor(student_id)
            .await
            .map_err(AssignmentError::LookupFailed)?
            .ok_or(AssignmentError::StudentNotFound(student_id))?;

        Ok(mentor)
    }
}
