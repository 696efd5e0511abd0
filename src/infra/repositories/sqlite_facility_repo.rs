use crate::domain::{models::facility::Facility, ports::FacilityRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteFacilityRepo {
    pool: SqlitePool,
}

impl SqliteFacilityRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FacilityRepository for SqliteFacilityRepo {
    async fn create(&self, facility: &Facility) -> Result<Facility, AppError> {
        sqlx::query_as::<_, Facility>(
            "INSERT INTO facilities (id, name, description, image_url, created_at) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&facility.id).bind(&facility.name).bind(&facility.description)
            .bind(&facility.image_url).bind(facility.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Facility>, AppError> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Facility>, AppError> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, facility: &Facility) -> Result<Facility, AppError> {
        sqlx::query_as::<_, Facility>(
            "UPDATE facilities SET name=?, description=?, image_url=? WHERE id=? RETURNING *"
        )
            .bind(&facility.name).bind(&facility.description).bind(&facility.image_url).bind(&facility.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Facility not found".to_string()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM facilities WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Facility not found".into())); }
        Ok(())
    }
}
