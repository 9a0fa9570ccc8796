//! # Student API Handlers
//!
//! Student creation, mentor assignment and the current-mentor lookup.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};

use super::parse_id;
use super::types::{AssignedMentorResponse, CreateStudentRequest, MentorResponse, StudentResponse};
use crate::error::{ApiError, assignment_error};
use crate::server::AppState;

/// Create a student with no mentor
#[utoipa::path(
    post,
    path = "/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse, headers(
            ("X-Trace-Id", description = "Trace identifier for request correlation")
        )),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let Json(request) = payload?;

    let student = state
        .assignments
        .create_student(request.into())
        .await
        .map_err(|e| assignment_error(e, "Unable to create student."))?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

async fn assign(
    state: &AppState,
    student_id: &str,
    mentor_id: &str,
    failure_message: &str,
) -> Result<Json<StudentResponse>, ApiError> {
    let student_id = parse_id(student_id, "student_id")?;
    let mentor_id = parse_id(mentor_id, "mentor_id")?;

    let student = state
        .assignments
        .assign_mentor(student_id, mentor_id)
        .await
        .map_err(|e| assignment_error(e, failure_message))?;

    Ok(Json(student.into()))
}

/// Assign a mentor to a student, replacing any current mentor
#[utoipa::path(
    post,
    path = "/students/{student_id}/assign-mentor/{mentor_id}",
    params(
        ("student_id" = String, Path, description = "Student id (UUID)"),
        ("mentor_id" = String, Path, description = "Mentor id (UUID)")
    ),
    responses(
        (status = 200, description = "Updated student", body = StudentResponse),
        (status = 400, description = "Malformed id", body = ApiError),
        (status = 404, description = "Mentor or student not found", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "students"
)]
pub async fn assign_mentor(
    State(state): State<AppState>,
    Path((student_id, mentor_id)): Path<(String, String)>,
) -> Result<Json<StudentResponse>, ApiError> {
    assign(&state, &student_id, &mentor_id, "Unable to assign mentor.").await
}

/// Change a student's mentor
///
/// Same behavior as assign-mentor; kept as a separate route for clients
/// that distinguish the two.
#[utoipa::path(
    post,
    path = "/students/{student_id}/change-mentor/{mentor_id}",
    params(
        ("student_id" = String, Path, description = "Student id (UUID)"),
        ("mentor_id" = String, Path, description = "Mentor id (UUID)")
    ),
    responses(
        (status = 200, description = "Updated student", body = StudentResponse),
        (status = 400, description = "Malformed id", body = ApiError),
        (status = 404, description = "Mentor or student not found", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "students"
)]
pub async fn change_mentor(
    State(state): State<AppState>,
    Path((student_id, mentor_id)): Path<(String, String)>,
) -> Result<Json<StudentResponse>, ApiError> {
    assign(
        &state,
        &student_id,
        &mentor_id,
        "Unable to assign/change mentor.",
    )
    .await
}

/// The mentor the student is currently assigned to
///
/// Responds with `{}` when the student has no mentor.
#[utoipa::path(
    get,
    path = "/students/{student_id}/previous-mentor",
    params(
        ("student_id" = String, Path, description = "Student id (UUID)")
    ),
    responses(
        (status = 200, description = "Current mentor, or an empty object", body = MentorResponse),
        (status = 400, description = "Malformed student id", body = ApiError),
        (status = 404, description = "Student not found", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tag = "students"
)]
pub async fn previous_mentor(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<AssignedMentorResponse>, ApiError> {
    let student_id = parse_id(&student_id, "student_id")?;

    let mentor = state
        .assignments
        .get_assigned_mentor(student_id)
        .await
        .map_err(|e| assignment_error(e, "Unable to fetch previous mentor."))?;

    Ok(Json(mentor.into()))
}
