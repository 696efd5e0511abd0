use crate::domain::{models::achievement::Achievement, ports::AchievementRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresAchievementRepo {
    pool: PgPool,
}

impl PostgresAchievementRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementRepository for PostgresAchievementRepo {
    async fn create(&self, achievement: &Achievement) -> Result<Achievement, AppError> {
        sqlx::query_as::<_, Achievement>(
            "INSERT INTO achievements (id, title, description, year, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING *"
        )
            .bind(&achievement.id).bind(&achievement.title).bind(&achievement.description)
            .bind(achievement.year).bind(achievement.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Achievement>, AppError> {
        sqlx::query_as::<_, Achievement>("SELECT * FROM achievements WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Achievement>, AppError> {
        sqlx::query_as::<_, Achievement>("SELECT * FROM achievements ORDER BY year DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, achievement: &Achievement) -> Result<Achievement, AppError> {
        sqlx::query_as::<_, Achievement>(
            "UPDATE achievements SET title=$1, description=$2, year=$3 WHERE id=$4 RETURNING *"
        )
            .bind(&achievement.title).bind(&achievement.description).bind(achievement.year).bind(&achievement.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Achievement not found".to_string()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Achievement not found".into())); }
        Ok(())
    }
}
