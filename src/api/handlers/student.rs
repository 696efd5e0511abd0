use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::CreateStudentRequest;
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::student::Student;
use crate::error::AppError;
use crate::state::AppState;

/// Public registration; bookings reference the returned id.
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let student = Student::new(payload.name, payload.email, payload.phone, payload.age);

    let created = state.student_repo.create(&student).await?;
    info!("Student registered: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_students(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let students = state.student_repo.list().await?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = state.student_repo.find_by_id(&student_id).await?
        .ok_or(AppError::NotFound("Student not found".into()))?;
    Ok(Json(student))
}
