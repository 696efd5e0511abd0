use crate::domain::{models::program::Program, ports::ProgramRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresProgramRepo {
    pool: PgPool,
}

impl PostgresProgramRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgramRepository for PostgresProgramRepo {
    async fn create(&self, program: &Program) -> Result<Program, AppError> {
        sqlx::query_as::<_, Program>(
            "INSERT INTO programs (id, name, description, age_group, schedule, price, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&program.id).bind(&program.name).bind(&program.description)
            .bind(&program.age_group).bind(&program.schedule).bind(program.price).bind(program.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Program>, AppError> {
        sqlx::query_as::<_, Program>("SELECT * FROM programs WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Program>, AppError> {
        sqlx::query_as::<_, Program>("SELECT * FROM programs ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, program: &Program) -> Result<Program, AppError> {
        sqlx::query_as::<_, Program>(
            "UPDATE programs SET name=$1, description=$2, age_group=$3, schedule=$4, price=$5 WHERE id=$6 RETURNING *"
        )
            .bind(&program.name).bind(&program.description).bind(&program.age_group)
            .bind(&program.schedule).bind(program.price).bind(&program.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Program not found".to_string()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM programs WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Program not found".into())); }
        Ok(())
    }
}
