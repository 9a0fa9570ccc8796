//! # API Types
//!
//! Request and response bodies shared by the mentor and student handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{mentor, student};
use crate::repositories::{NewMentor, NewStudent};

/// Request payload for creating a mentor; every field is optional
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateMentorRequest {
    /// Caller-supplied identifier (also accepted as `id`)
    #[serde(default, alias = "id")]
    #[schema(example = "M-001")]
    pub external_id: Option<String>,
    #[schema(example = "Grace Hopper")]
    pub name: Option<String>,
    #[schema(example = "grace@example.com")]
    pub email: Option<String>,
}

impl From<CreateMentorRequest> for NewMentor {
    fn from(request: CreateMentorRequest) -> Self {
        Self {
            external_id: request.external_id,
            name: request.name,
            email: request.email,
        }
    }
}

/// Request payload for creating a student; every field is optional.
///
/// A `mentor` field in the payload is ignored: mentors are only set through
/// the assignment endpoints.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    /// Caller-supplied identifier (also accepted as `id`)
    #[serde(default, alias = "id")]
    #[schema(example = "S-042")]
    pub external_id: Option<String>,
    #[schema(example = "Sam Lee")]
    pub name: Option<String>,
    #[schema(example = "sam@example.com")]
    pub email: Option<String>,
    #[schema(example = "B42")]
    pub batch: Option<String>,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(request: CreateStudentRequest) -> Self {
        Self {
            external_id: request.external_id,
            name: request.name,
            email: request.email,
            batch: request.batch,
        }
    }
}

/// Mentor record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MentorResponse {
    /// Generated identifier
    pub id: Uuid,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Creation timestamp (RFC 3339)
    #[schema(example = "2024-06-01T10:30:00+00:00")]
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

impl From<mentor::Model> for MentorResponse {
    fn from(model: mentor::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id,
            name: model.name,
            email: model.email,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// Student record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    /// Generated identifier
    pub id: Uuid,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub batch: Option<String>,
    /// Id of the currently assigned mentor, `null` when unassigned
    pub mentor: Option<Uuid>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Timestamp of the last assignment (RFC 3339)
    pub updated_at: String,
}

impl From<student::Model> for StudentResponse {
    fn from(model: student::Model) -> Self {
        Self {
            id: model.id,
            external_id: model.external_id,
            name: model.name,
            email: model.email,
            batch: model.batch,
            mentor: model.mentor_id,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// Body of the previous-mentor endpoint: the mentor record, or `{}` when
/// the student has no mentor.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AssignedMentorResponse {
    Assigned(MentorResponse),
    Unassigned {},
}

impl From<Option<mentor::Model>> for AssignedMentorResponse {
    fn from(mentor: Option<mentor::Model>) -> Self {
        match mentor {
            Some(mentor) => Self::Assigned(mentor.into()),
            None => Self::Unassigned {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_id_alias_and_ignores_mentor() {
        let request: CreateStudentRequest = serde_json::from_value(json!({
            "id": "S-1",
            "name": "Sam",
            "mentor": "ignored"
        }))
        .unwrap();

        assert_eq!(request.external_id.as_deref(), Some("S-1"));
        assert_eq!(request.name.as_deref(), Some("Sam"));
        assert_eq!(request.batch, None);
    }

    #[test]
    fn test_create_request_accepts_empty_object() {
        let request: CreateMentorRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(NewMentor::from(request), NewMentor::default());
    }

    #[test]
    fn test_unassigned_mentor_serializes_as_empty_object() {
        let body = serde_json::to_value(AssignedMentorResponse::from(None)).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_assigned_mentor_serializes_as_record() {
        let now = Utc::now().into();
        let id = Uuid::new_v4();
        let mentor = mentor::Model {
            id,
            external_id: None,
            name: Some("Grace".to_string()),
            email: None,
            created_at: now,
            updated_at: now,
        };

        let body = serde_json::to_value(AssignedMentorResponse::from(Some(mentor))).unwrap();
        assert_eq!(body["id"], json!(id));
        assert_eq!(body["name"], "Grace");
        assert_eq!(body["email"], serde_json::Value::Null);
    }
}
