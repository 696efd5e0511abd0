use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use tracing::info;

use crate::api::dtos::requests::ContactRequest;
use crate::api::dtos::responses::MessageResponse;
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::contact::ContactMessage;
use crate::error::AppError;
use crate::state::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let message = ContactMessage::new(
        payload.name,
        payload.email,
        payload.phone,
        payload.subject,
        payload.message,
    );

    let created = state.contact_repo.create(&message).await?;
    info!("Contact message received: {} from {}", created.id, created.email);

    Ok((StatusCode::CREATED, Json(MessageResponse {
        message: "Thank you for contacting us. We will get back to you soon.".to_string(),
    })))
}

pub async fn list_contact_messages(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, AppError> {
    let messages = state.contact_repo.list().await?;
    Ok(Json(messages))
}
