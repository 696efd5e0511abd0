use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Booking lifecycle. Only `Pending` and `Confirmed` hold a slot against
/// new bookings; the two terminal states release it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn is_occupying(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Legal moves: pending -> confirmed/cancelled, confirmed -> completed/cancelled.
    /// Re-asserting the current status is allowed; terminal states admit nothing else.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        match (self, next) {
            (current, target) if current == target => true,
            (Pending, Confirmed) | (Pending, Cancelled) => true,
            (Confirmed, Completed) | (Confirmed, Cancelled) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub student_id: String,
    pub program_id: String,
    pub coach_id: String,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub student_id: String,
    pub program_id: String,
    pub coach_id: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub notes: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            student_id: params.student_id,
            program_id: params.program_id,
            coach_id: params.coach_id,
            booking_date: params.date,
            start_time: params.start,
            end_time: params.end,
            status: BookingStatus::Pending,
            notes: params.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Filters for the admin booking list. `page` is 1-based.
pub struct BookingFilter {
    pub status: Option<BookingStatus>,
    pub date: Option<NaiveDate>,
    pub page: i64,
    pub limit: i64,
}

impl BookingFilter {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}
