use crate::domain::{models::facility::Facility, ports::FacilityRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresFacilityRepo {
    pool: PgPool,
}

impl PostgresFacilityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FacilityRepository for PostgresFacilityRepo {
    async fn create(&self, facility: &Facility) -> Result<Facility, AppError> {
        sqlx::query_as::<_, Facility>(
            "INSERT INTO facilities (id, name, description, image_url, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING *"
        )
            .bind(&facility.id).bind(&facility.name).bind(&facility.description)
            .bind(&facility.image_url).bind(facility.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Facility>, AppError> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Facility>, AppError> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, facility: &Facility) -> Result<Facility, AppError> {
        sqlx::query_as::<_, Facility>(
            "UPDATE facilities SET name=$1, description=$2, image_url=$3 WHERE id=$4 RETURNING *"
        )
            .bind(&facility.name).bind(&facility.description).bind(&facility.image_url).bind(&facility.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Facility not found".to_string()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM facilities WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Facility not found".into())); }
        Ok(())
    }
}
