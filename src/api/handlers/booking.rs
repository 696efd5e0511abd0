use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::{info, warn};

use crate::api::dtos::requests::{
    AvailableSlotsQuery, CreateBookingRequest, ListBookingsQuery, UpdateBookingRequest,
};
use crate::api::dtos::responses::{
    AvailableSlotsResponse, BookingListResponse, BookingResponse, MessageResponse, Pagination,
    SlotDto,
};
use crate::api::extractors::auth::AdminUser;
use crate::domain::models::booking::{Booking, BookingFilter, BookingStatus, NewBookingParams};
use crate::domain::services::scheduling;
use crate::error::AppError;
use crate::state::AppState;

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (expected YYYY-MM-DD)".into()))
}

fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| AppError::Validation("Invalid time format (expected HH:MM)".into()))
}

pub async fn available_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AvailableSlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let coach_id = params.coach_id
        .ok_or(AppError::Validation("coach_id is required".into()))?;
    let date_raw = params.date
        .ok_or(AppError::Validation("date is required".into()))?;
    let date = parse_date(&date_raw)?;

    let existing = state.booking_repo.list_occupying(&coach_id, date).await?;
    let slots = scheduling::available_slots(&state.config.slot_grid, &existing);

    Ok(Json(AvailableSlotsResponse {
        available_slots: slots
            .into_iter()
            .map(|s| SlotDto {
                start_time: s.start.format("%H:%M").to_string(),
                end_time: s.end.format("%H:%M").to_string(),
            })
            .collect(),
    }))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = payload.student_id
        .ok_or(AppError::Validation("student_id is required".into()))?;
    let program_id = payload.program_id
        .ok_or(AppError::Validation("program_id is required".into()))?;
    let coach_id = payload.coach_id
        .ok_or(AppError::Validation("coach_id is required".into()))?;
    let date = parse_date(&payload.booking_date
        .ok_or(AppError::Validation("booking_date is required".into()))?)?;
    let start = parse_time(&payload.start_time
        .ok_or(AppError::Validation("start_time is required".into()))?)?;
    let end = parse_time(&payload.end_time
        .ok_or(AppError::Validation("end_time is required".into()))?)?;

    if start >= end {
        return Err(AppError::Validation("start_time must be before end_time".into()));
    }

    let existing = state.booking_repo.list_occupying(&coach_id, date).await?;
    if scheduling::has_conflict(&existing, start, end, None) {
        warn!("Booking rejected: {} {} - {} already taken for coach {}", date, start, end, coach_id);
        return Err(AppError::Conflict("Time slot is already booked".into()));
    }

    let booking = Booking::new(NewBookingParams {
        student_id,
        program_id,
        coach_id,
        date,
        start,
        end,
        notes: payload.notes,
    });

    // The store re-runs the same guard atomically on insert.
    let created = state.booking_repo.create(&booking).await?;

    info!("Booking created: {} on {} ({} - {})", created.id, created.booking_date, created.start_time, created.end_time);
    Ok((StatusCode::CREATED, Json(BookingResponse { booking: created })))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Query(params): Query<ListBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = match params.status.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<BookingStatus>()
            .map_err(|_| AppError::Validation("Invalid status filter".into()))?),
    };
    let date = match params.date.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(parse_date(raw)?),
    };

    let filter = BookingFilter {
        status,
        date,
        page: params.page.unwrap_or(1).max(1),
        limit: params.limit.unwrap_or(10).clamp(1, 100),
    };

    let (bookings, total) = state.booking_repo.list(&filter).await?;
    let total_pages = (total + filter.limit - 1) / filter.limit;

    Ok(Json(BookingListResponse {
        bookings,
        pagination: Pagination {
            page: filter.page,
            limit: filter.limit,
            total,
            total_pages,
        },
    }))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    Ok(Json(BookingResponse { booking }))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if let Some(next) = payload.status {
        if !booking.status.can_transition_to(next) {
            return Err(AppError::InvalidState(format!(
                "Cannot change a {} booking to {}",
                booking.status, next
            )));
        }
        booking.status = next;
    }
    if let Some(notes) = payload.notes {
        booking.notes = Some(notes);
    }

    let updated = state.booking_repo.update(&booking).await?;
    info!("Booking updated: {} (status: {})", updated.id, updated.status);
    Ok(Json(BookingResponse { booking: updated }))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    _admin: AdminUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.status == BookingStatus::Completed {
        return Err(AppError::InvalidState("Completed bookings cannot be cancelled".into()));
    }

    if booking.status != BookingStatus::Cancelled {
        booking.status = BookingStatus::Cancelled;
        state.booking_repo.update(&booking).await?;
        info!("Booking cancelled: {}", booking.id);
    }

    Ok(Json(MessageResponse {
        message: "Booking cancelled successfully".to_string(),
    }))
}
