use crate::domain::{models::booking::{Booking, BookingFilter}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::{Row, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        // Guard and insert in a single statement. SQLite executes it
        // atomically, so two racing creates cannot both pass the overlap
        // check; the partial unique index on (coach_id, booking_date,
        // start_time) backstops exact-duplicate races.
        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, student_id, program_id, coach_id, booking_date, start_time, end_time, status, notes, created_at, updated_at)
             SELECT ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
             WHERE NOT EXISTS (
                 SELECT 1 FROM bookings
                 WHERE coach_id = ? AND booking_date = ?
                   AND status IN ('pending', 'confirmed')
                   AND start_time < ? AND end_time > ?
             )
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.student_id).bind(&booking.program_id).bind(&booking.coach_id)
            .bind(booking.booking_date).bind(booking.start_time).bind(booking.end_time)
            .bind(booking.status).bind(&booking.notes).bind(booking.created_at).bind(booking.updated_at)
            .bind(&booking.coach_id).bind(booking.booking_date).bind(booking.end_time).bind(booking.start_time)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?;

        created.ok_or_else(|| AppError::Conflict("Time slot is already booked".to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filter: &BookingFilter) -> Result<(Vec<Booking>, i64), AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings
             WHERE (? IS NULL OR status = ?) AND (? IS NULL OR booking_date = ?)
             ORDER BY booking_date DESC, start_time ASC
             LIMIT ? OFFSET ?"
        )
            .bind(filter.status).bind(filter.status)
            .bind(filter.date).bind(filter.date)
            .bind(filter.limit).bind(filter.offset())
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;

        let total = sqlx::query(
            "SELECT COUNT(*) as count FROM bookings WHERE (? IS NULL OR status = ?) AND (? IS NULL OR booking_date = ?)"
        )
            .bind(filter.status).bind(filter.status)
            .bind(filter.date).bind(filter.date)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;

        Ok((bookings, total.get::<i64, _>("count")))
    }

    async fn list_occupying(&self, coach_id: &str, date: NaiveDate) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE coach_id = ? AND booking_date = ? AND status IN ('pending', 'confirmed') ORDER BY start_time ASC"
        )
            .bind(coach_id).bind(date)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = ?, notes = ?, updated_at = ? WHERE id = ? RETURNING *"
        )
            .bind(booking.status).bind(&booking.notes).bind(Utc::now()).bind(&booking.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }
}
