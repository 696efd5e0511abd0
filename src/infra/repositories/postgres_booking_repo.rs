use crate::domain::{models::booking::{Booking, BookingFilter}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::{PgPool, Row};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Row lock on the coach serializes same-coach writes, so two
        // overlapping creates cannot both pass the guard under
        // read-committed isolation.
        let coach = sqlx::query("SELECT id FROM coaches WHERE id = $1 FOR UPDATE")
            .bind(&booking.coach_id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;

        if coach.is_none() {
            return Err(AppError::Validation("Referenced record does not exist".to_string()));
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, student_id, program_id, coach_id, booking_date, start_time, end_time, status, notes, created_at, updated_at)
             SELECT $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11
             WHERE NOT EXISTS (
                 SELECT 1 FROM bookings
                 WHERE coach_id = $4 AND booking_date = $5
                   AND status IN ('pending', 'confirmed')
                   AND start_time < $7 AND end_time > $6
             )
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.student_id).bind(&booking.program_id).bind(&booking.coach_id)
            .bind(booking.booking_date).bind(booking.start_time).bind(booking.end_time)
            .bind(booking.status).bind(&booking.notes).bind(booking.created_at).bind(booking.updated_at)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        created.ok_or_else(|| AppError::Conflict("Time slot is already booked".to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filter: &BookingFilter) -> Result<(Vec<Booking>, i64), AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings
             WHERE ($1 IS NULL OR status = $1) AND ($2 IS NULL OR booking_date = $2)
             ORDER BY booking_date DESC, start_time ASC
             LIMIT $3 OFFSET $4"
        )
            .bind(filter.status).bind(filter.date)
            .bind(filter.limit).bind(filter.offset())
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;

        let total = sqlx::query(
            "SELECT COUNT(*) as count FROM bookings WHERE ($1 IS NULL OR status = $1) AND ($2 IS NULL OR booking_date = $2)"
        )
            .bind(filter.status).bind(filter.date)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;

        Ok((bookings, total.get::<i64, _>("count")))
    }

    async fn list_occupying(&self, coach_id: &str, date: NaiveDate) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE coach_id = $1 AND booking_date = $2 AND status IN ('pending', 'confirmed') ORDER BY start_time ASC"
        )
            .bind(coach_id).bind(date)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1, notes = $2, updated_at = $3 WHERE id = $4 RETURNING *"
        )
            .bind(booking.status).bind(&booking.notes).bind(Utc::now()).bind(&booking.id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }
}
