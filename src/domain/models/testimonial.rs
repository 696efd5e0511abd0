use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Parent/player feedback shown on the public site once published.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Testimonial {
    pub id: String,
    pub author_name: String,
    pub relation: String,
    pub content: String,
    pub rating: i32,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn new(author_name: String, relation: String, content: String, rating: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author_name,
            relation,
            content,
            rating,
            is_published: false,
            created_at: Utc::now(),
        }
    }
}
