use crate::domain::{models::coach::Coach, ports::CoachRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCoachRepo {
    pool: SqlitePool,
}

impl SqliteCoachRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoachRepository for SqliteCoachRepo {
    async fn create(&self, coach: &Coach) -> Result<Coach, AppError> {
        sqlx::query_as::<_, Coach>(
            "INSERT INTO coaches (id, name, specialization, bio, experience_years, photo_url, display_order, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&coach.id).bind(&coach.name).bind(&coach.specialization).bind(&coach.bio)
            .bind(coach.experience_years).bind(&coach.photo_url).bind(coach.display_order).bind(coach.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Coach>, AppError> {
        sqlx::query_as::<_, Coach>("SELECT * FROM coaches WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Coach>, AppError> {
        sqlx::query_as::<_, Coach>("SELECT * FROM coaches ORDER BY display_order ASC, name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, coach: &Coach) -> Result<Coach, AppError> {
        sqlx::query_as::<_, Coach>(
            "UPDATE coaches SET name=?, specialization=?, bio=?, experience_years=?, photo_url=?, display_order=? WHERE id=? RETURNING *"
        )
            .bind(&coach.name).bind(&coach.specialization).bind(&coach.bio)
            .bind(coach.experience_years).bind(&coach.photo_url).bind(coach.display_order).bind(&coach.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Coach not found".to_string()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM coaches WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Coach not found".into())); }
        Ok(())
    }
}
