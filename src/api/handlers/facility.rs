use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::{CreateFacilityRequest, UpdateFacilityRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::facility::Facility;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_facilities(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let facilities = state.facility_repo.list().await?;
    Ok(Json(facilities))
}

pub async fn create_facility(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateFacilityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let facility = Facility::new(
        payload.name,
        payload.description.unwrap_or_default(),
        payload.image_url,
    );

    let created = state.facility_repo.create(&facility).await?;
    info!("Facility created: {} ({})", created.name, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_facility(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(facility_id): Path<String>,
    Json(payload): Json<UpdateFacilityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut facility = state.facility_repo.find_by_id(&facility_id).await?
        .ok_or(AppError::NotFound("Facility not found".into()))?;

    if let Some(val) = payload.name { facility.name = val; }
    if let Some(val) = payload.description { facility.description = val; }
    if let Some(val) = payload.image_url { facility.image_url = Some(val); }

    let updated = state.facility_repo.update(&facility).await?;
    info!("Facility updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_facility(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(facility_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.facility_repo.delete(&facility_id).await?;
    info!("Facility deleted: {}", facility_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
