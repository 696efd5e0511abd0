use serde::Deserialize;

use crate::domain::models::booking::BookingStatus;

/// Public booking form. Everything is optional at the wire level so that
/// missing fields surface as a 400 instead of a deserialization reject.
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub student_id: Option<String>,
    pub program_id: Option<String>,
    pub coach_id: Option<String>,
    pub booking_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateBookingRequest {
    pub status: Option<BookingStatus>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct ListBookingsQuery {
    pub status: Option<String>,
    pub date: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct AvailableSlotsQuery {
    pub coach_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCoachRequest {
    pub name: String,
    pub specialization: String,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub photo_url: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateCoachRequest {
    pub name: Option<String>,
    pub specialization: Option<String>,
    pub bio: Option<String>,
    pub experience_years: Option<i32>,
    pub photo_url: Option<String>,
    pub display_order: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateProgramRequest {
    pub name: String,
    pub age_group: String,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub price: Option<i64>,
}

#[derive(Deserialize)]
pub struct UpdateProgramRequest {
    pub name: Option<String>,
    pub age_group: Option<String>,
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub price: Option<i64>,
}

#[derive(Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateTestimonialRequest {
    pub author_name: String,
    pub content: String,
    pub relation: Option<String>,
    pub rating: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateTestimonialRequest {
    pub author_name: Option<String>,
    pub content: Option<String>,
    pub relation: Option<String>,
    pub rating: Option<i32>,
    pub is_published: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateFacilityRequest {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateFacilityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateGalleryImageRequest {
    pub title: String,
    pub image_url: String,
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateAchievementRequest {
    pub title: String,
    pub year: i32,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateAchievementRequest {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
}
