use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A training program offered by the academy. `price` is in whole
/// currency units per month.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
    pub age_group: String,
    pub schedule: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Program {
    pub fn new(name: String, description: String, age_group: String, schedule: String, price: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            age_group,
            schedule,
            price,
            created_at: Utc::now(),
        }
    }
}
