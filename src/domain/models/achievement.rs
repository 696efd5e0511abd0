use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

impl Achievement {
    pub fn new(title: String, description: String, year: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            year,
            created_at: Utc::now(),
        }
    }
}
