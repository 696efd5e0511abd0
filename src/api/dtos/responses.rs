use serde::Serialize;

use crate::domain::models::booking::Booking;

#[derive(Serialize)]
pub struct BookingResponse {
    pub booking: Booking,
}

#[derive(Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

#[derive(Serialize)]
pub struct SlotDto {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Serialize)]
pub struct AvailableSlotsResponse {
    #[serde(rename = "availableSlots")]
    pub available_slots: Vec<SlotDto>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}
