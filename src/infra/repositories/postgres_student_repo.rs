use crate::domain::{models::student::Student, ports::StudentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresStudentRepo {
    pool: PgPool,
}

impl PostgresStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepo {
    async fn create(&self, student: &Student) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (id, name, email, phone, age, created_at) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
        )
            .bind(&student.id).bind(&student.name).bind(&student.email)
            .bind(&student.phone).bind(student.age).bind(student.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
