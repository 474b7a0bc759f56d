use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::constants::{COURSE_NOT_FOUND, ROUTE_NOT_FOUND, STUDENT_INFO_MESSAGE, STUDENT_NOT_FOUND};
use crate::domain::{Course, Student, StudentCourses, StudentInfo};
use crate::envelope::{linked, Envelope};
use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::validation;

/// A body that failed to parse as JSON is reported like any other validation issue.
fn json_body(payload: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "course-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn student_info(State(state): State<AppState>) -> Json<Envelope<StudentInfo>> {
    Json(Envelope::ok(STUDENT_INFO_MESSAGE, state.profile.as_ref().clone()))
}

pub async fn list_students(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Student>>>> {
    let students = state.storage.list_students().await?;
    Ok(Json(Envelope::data(students)))
}

pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Course>>>> {
    let courses = state.storage.list_courses().await?;
    Ok(Json(Envelope::data(courses)))
}

pub async fn student_courses(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse> {
    validation::validate_student_id(&student_id)?;

    let listing: StudentCourses = state
        .storage
        .student_courses(&student_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(STUDENT_NOT_FOUND.to_string()))?;

    Ok(linked(
        format!("/students/{student_id}/courses"),
        Envelope::ok(format!("Get courses detail of student {student_id}"), listing),
    ))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse> {
    let course_id = validation::parse_course_id(&raw_id)?;

    let course = state
        .storage
        .get_course(course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(COURSE_NOT_FOUND.to_string()))?;

    Ok(linked(
        format!("/courses/{course_id}"),
        Envelope::ok(format!("Get course {course_id} successfully"), course),
    ))
}

pub async fn create_course(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let course = validation::course_create_body(json_body(payload)?)?;
    let course = state.storage.create_course(course).await?;
    info!(course_id = course.course_id, "course created");

    Ok(linked(
        format!("/courses/{}", course.course_id),
        Envelope::ok(
            format!("Course {} has been added successfully", course.course_id),
            course,
        ),
    ))
}

pub async fn update_course(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let patch = validation::course_update_body(json_body(payload)?)?;
    let course = state.storage.update_course(patch).await?;
    info!(course_id = course.course_id, "course updated");

    Ok(linked(
        format!("/courses/{}", course.course_id),
        Envelope::ok(
            format!("course {} has been updated successfully", course.course_id),
            course,
        ),
    ))
}

pub async fn delete_course(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope<Course>>> {
    let course_id = validation::course_delete_body(json_body(payload)?)?;
    let removed = state.storage.delete_course(course_id).await?;
    info!(course_id = removed.course_id, "course deleted");

    Ok(Json(Envelope::ok(
        format!("Course {} has been deleted successfully", removed.course_id),
        removed,
    )))
}

pub async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND.to_string())
}
