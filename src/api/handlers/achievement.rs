use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::{CreateAchievementRequest, UpdateAchievementRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::achievement::Achievement;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_achievements(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let achievements = state.achievement_repo.list().await?;
    Ok(Json(achievements))
}

pub async fn create_achievement(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateAchievementRequest>,
) -> Result<impl IntoResponse, AppError> {
    let achievement = Achievement::new(
        payload.title,
        payload.description.unwrap_or_default(),
        payload.year,
    );

    let created = state.achievement_repo.create(&achievement).await?;
    info!("Achievement created: {} ({})", created.title, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_achievement(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(achievement_id): Path<String>,
    Json(payload): Json<UpdateAchievementRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut achievement = state.achievement_repo.find_by_id(&achievement_id).await?
        .ok_or(AppError::NotFound("Achievement not found".into()))?;

    if let Some(val) = payload.title { achievement.title = val; }
    if let Some(val) = payload.description { achievement.description = val; }
    if let Some(val) = payload.year { achievement.year = val; }

    let updated = state.achievement_repo.update(&achievement).await?;
    info!("Achievement updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_achievement(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(achievement_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.achievement_repo.delete(&achievement_id).await?;
    info!("Achievement deleted: {}", achievement_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
