use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::{CreateCoachRequest, UpdateCoachRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::coach::{Coach, NewCoachParams};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_coaches(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let coaches = state.coach_repo.list().await?;
    Ok(Json(coaches))
}

pub async fn get_coach(
    State(state): State<Arc<AppState>>,
    Path(coach_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let coach = state.coach_repo.find_by_id(&coach_id).await?
        .ok_or(AppError::NotFound("Coach not found".into()))?;
    Ok(Json(coach))
}

pub async fn create_coach(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateCoachRequest>,
) -> Result<impl IntoResponse, AppError> {
    let coach = Coach::new(NewCoachParams {
        name: payload.name,
        specialization: payload.specialization,
        bio: payload.bio.unwrap_or_default(),
        experience_years: payload.experience_years.unwrap_or(0),
        photo_url: payload.photo_url,
        display_order: payload.display_order.unwrap_or(0),
    });

    let created = state.coach_repo.create(&coach).await?;
    info!("Coach created: {} ({})", created.name, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_coach(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(coach_id): Path<String>,
    Json(payload): Json<UpdateCoachRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut coach = state.coach_repo.find_by_id(&coach_id).await?
        .ok_or(AppError::NotFound("Coach not found".into()))?;

    if let Some(val) = payload.name { coach.name = val; }
    if let Some(val) = payload.specialization { coach.specialization = val; }
    if let Some(val) = payload.bio { coach.bio = val; }
    if let Some(val) = payload.experience_years { coach.experience_years = val; }
    if let Some(val) = payload.photo_url { coach.photo_url = Some(val); }
    if let Some(val) = payload.display_order { coach.display_order = val; }

    let updated = state.coach_repo.update(&coach).await?;
    info!("Coach updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_coach(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(coach_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.coach_repo.delete(&coach_id).await?;
    info!("Coach deleted: {}", coach_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
