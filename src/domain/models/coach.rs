use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Coach {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub bio: String,
    pub experience_years: i32,
    pub photo_url: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

pub struct NewCoachParams {
    pub name: String,
    pub specialization: String,
    pub bio: String,
    pub experience_years: i32,
    pub photo_url: Option<String>,
    pub display_order: i32,
}

impl Coach {
    pub fn new(params: NewCoachParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            specialization: params.specialization,
            bio: params.bio,
            experience_years: params.experience_years,
            photo_url: params.photo_url,
            display_order: params.display_order,
            created_at: Utc::now(),
        }
    }
}
