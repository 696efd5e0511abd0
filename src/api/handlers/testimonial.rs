use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::{CreateTestimonialRequest, UpdateTestimonialRequest};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::testimonial::Testimonial;
use crate::error::AppError;
use crate::state::AppState;

/// Public list: published entries only. The admin list lives on the same
/// repository with the filter disabled.
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let testimonials = state.testimonial_repo.list(true).await?;
    Ok(Json(testimonials))
}

pub async fn list_all_testimonials(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let testimonials = state.testimonial_repo.list(false).await?;
    Ok(Json(testimonials))
}

pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Json(payload): Json<CreateTestimonialRequest>,
) -> Result<impl IntoResponse, AppError> {
    let rating = payload.rating.unwrap_or(5);
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation("rating must be between 1 and 5".into()));
    }

    let testimonial = Testimonial::new(
        payload.author_name,
        payload.relation.unwrap_or_default(),
        payload.content,
        rating,
    );

    let created = state.testimonial_repo.create(&testimonial).await?;
    info!("Testimonial created: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_testimonial(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(testimonial_id): Path<String>,
    Json(payload): Json<UpdateTestimonialRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut testimonial = state.testimonial_repo.find_by_id(&testimonial_id).await?
        .ok_or(AppError::NotFound("Testimonial not found".into()))?;

    if let Some(val) = payload.author_name { testimonial.author_name = val; }
    if let Some(val) = payload.relation { testimonial.relation = val; }
    if let Some(val) = payload.content { testimonial.content = val; }
    if let Some(val) = payload.rating {
        if !(1..=5).contains(&val) {
            return Err(AppError::Validation("rating must be between 1 and 5".into()));
        }
        testimonial.rating = val;
    }
    if let Some(val) = payload.is_published { testimonial.is_published = val; }

    let updated = state.testimonial_repo.update(&testimonial).await?;
    info!("Testimonial updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_testimonial(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(testimonial_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.testimonial_repo.delete(&testimonial_id).await?;
    info!("Testimonial deleted: {}", testimonial_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
