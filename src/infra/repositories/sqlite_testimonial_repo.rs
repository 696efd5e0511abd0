use crate::domain::{models::testimonial::Testimonial, ports::TestimonialRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteTestimonialRepo {
    pool: SqlitePool,
}

impl SqliteTestimonialRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for SqliteTestimonialRepo {
    async fn create(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "INSERT INTO testimonials (id, author_name, relation, content, rating, is_published, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&testimonial.id).bind(&testimonial.author_name).bind(&testimonial.relation)
            .bind(&testimonial.content).bind(testimonial.rating).bind(testimonial.is_published).bind(testimonial.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Testimonial>, AppError> {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, published_only: bool) -> Result<Vec<Testimonial>, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "SELECT * FROM testimonials WHERE (? = 0 OR is_published = 1) ORDER BY created_at DESC"
        )
            .bind(published_only)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError> {
        sqlx::query_as::<_, Testimonial>(
            "UPDATE testimonials SET author_name=?, relation=?, content=?, rating=?, is_published=? WHERE id=? RETURNING *"
        )
            .bind(&testimonial.author_name).bind(&testimonial.relation).bind(&testimonial.content)
            .bind(testimonial.rating).bind(testimonial.is_published).bind(&testimonial.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Testimonial not found".to_string()))
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Testimonial not found".into())); }
        Ok(())
    }
}
