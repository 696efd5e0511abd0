use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::{CreateProgramRequest, UpdateProgramRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::program::Program;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_programs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let programs = state.program_repo.list().await?;
    Ok(Json(programs))
}

pub async fn get_program(
    State(state): State<Arc<AppState>>,
    Path(program_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let program = state.program_repo.find_by_id(&program_id).await?
        .ok_or(AppError::NotFound("Program not found".into()))?;
    Ok(Json(program))
}

pub async fn create_program(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateProgramRequest>,
) -> Result<impl IntoResponse, AppError> {
    let program = Program::new(
        payload.name,
        payload.description.unwrap_or_default(),
        payload.age_group,
        payload.schedule.unwrap_or_default(),
        payload.price.unwrap_or(0),
    );

    let created = state.program_repo.create(&program).await?;
    info!("Program created: {} ({})", created.name, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_program(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(program_id): Path<String>,
    Json(payload): Json<UpdateProgramRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut program = state.program_repo.find_by_id(&program_id).await?
        .ok_or(AppError::NotFound("Program not found".into()))?;

    if let Some(val) = payload.name { program.name = val; }
    if let Some(val) = payload.age_group { program.age_group = val; }
    if let Some(val) = payload.description { program.description = val; }
    if let Some(val) = payload.schedule { program.schedule = val; }
    if let Some(val) = payload.price { program.price = val; }

    let updated = state.program_repo.update(&program).await?;
    info!("Program updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_program(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(program_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.program_repo.delete(&program_id).await?;
    info!("Program deleted: {}", program_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
