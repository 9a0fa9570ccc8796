//! # Mentor API Handlers
//!
//! Mentor creation and the mentor -> students listing.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};

use super::parse_id;
use super::types::{CreateMentorRequest, MentorResponse, StudentResponse};
use crate::error::{ApiError, assignment_error};
use crate::server::AppState;

/// Create a mentor
#[utoipa::path(
    post,
    path = "/mentors",
    request_body = CreateMentorRequest,
    responses(
        (status = 201, description = "Mentor created", body = MentorResponse, headers(
            ("X-Trace-Id", description = "Trace identifier for request correlation")
        )),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "mentors"
)]
pub async fn create_mentor(
    State(state): State<AppState>,
    payload: Result<Json<CreateMentorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MentorResponse>), ApiError> {
    let Json(request) = payload?;

    let mentor = state
        .assignments
        .create_mentor(request.into())
        .await
        .map_err(|e| assignment_error(e, "Unable to create mentor."))?;

    Ok((StatusCode::CREATED, Json(mentor.into())))
}

/// List the students currently assigned to a mentor
///
/// Unknown mentors yield an empty list.
#[utoipa::path(
    get,
    path = "/mentors/{mentor_id}/students",
    params(
        ("mentor_id" = String, Path, description = "Mentor id (UUID)")
    ),
    responses(
        (status = 200, description = "Assigned students", body = Vec<StudentResponse>),
        (status = 400, description = "Malformed mentor id", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "mentors"
)]
pub async fn list_mentor_students(
    State(state): State<AppState>,
    Path(mentor_id): Path<String>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let mentor_id = parse_id(&mentor_id, "mentor_id")?;

    let students = state
        .assignments
        .list_students_for_mentor(mentor_id)
        .await
        .map_err(|e| assignment_error(e, "Unable to fetch students."))?;

    Ok(Json(students.into_iter().map(Into::into).collect()))
}
