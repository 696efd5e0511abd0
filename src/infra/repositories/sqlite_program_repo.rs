use crate::domain::{models::program::Program, ports::ProgramRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProgramRepo {
    pool: SqlitePool,
}

impl SqliteProgramRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgramRepository for SqliteProgramRepo {
    async fn create(&self, program: &Program) -> Result<Program, AppError> {
        sqlx::query_as::<_, Program>(
            "INSERT INTO programs (id, name, description, age_group, schedule, price, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&program.id).bind(&program.name).bind(&program.description)
            .bind(&program.age_group).bind(&program.schedule).bind(program.price).bind(program.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Program>, AppError> {
        sqlx::query_as::<_, Program>("SELECT * FROM programs WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Program>, AppError> {
        sqlx::query_as::<_, Program>("SELECT * FROM programs ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, program: &Program) -> Result<Program, AppError> {
        sqlx::query_as::<_, Program>(
            "UPDATE programs SET name=?, description=?, age_group=?, schedule=?, price=? WHERE id=? RETURNING *"
        )
            .bind(&program.name).bind(&program.description).bind(&program.age_group)
            .bind(&program.schedule).bind(program.price).bind(&program.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Program not found".to_string()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM programs WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Program not found".into())); }
        Ok(())
    }
}
