use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::CreateGalleryImageRequest;
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::gallery::GalleryImage;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_gallery(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let images = state.gallery_repo.list().await?;
    Ok(Json(images))
}

pub async fn create_gallery_image(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateGalleryImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let image = GalleryImage::new(
        payload.title,
        payload.category.unwrap_or_else(|| "general".to_string()),
        payload.image_url,
    );

    let created = state.gallery_repo.create(&image).await?;
    info!("Gallery image added: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_gallery_image(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(image_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.gallery_repo.delete(&image_id).await?;
    info!("Gallery image deleted: {}", image_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
