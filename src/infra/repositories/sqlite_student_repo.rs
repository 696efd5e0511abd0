use crate::domain::{models::student::Student, ports::StudentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteStudentRepo {
    pool: SqlitePool,
}

impl SqliteStudentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepo {
    async fn create(&self, student: &Student) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (id, name, email, phone, age, created_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&student.id).bind(&student.name).bind(&student.email)
            .bind(&student.phone).bind(student.age).bind(student.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
