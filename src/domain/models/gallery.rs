use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct GalleryImage {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl GalleryImage {
    pub fn new(title: String, category: String, image_url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            category,
            image_url,
            created_at: Utc::now(),
        }
    }
}
