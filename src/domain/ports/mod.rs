use crate::domain::models::{
    achievement::Achievement,
    booking::{Booking, BookingFilter},
    coach::Coach,
    contact::ContactMessage,
    facility::Facility,
    gallery::GalleryImage,
    program::Program,
    student::Student,
    testimonial::Testimonial,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert with the conflict guard applied inside the store. Returns
    /// `Conflict` when the interval collides with an occupying booking
    /// for the same coach and date, including under concurrent creates.
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    /// Filtered page plus the total row count for the filter.
    async fn list(&self, filter: &BookingFilter) -> Result<(Vec<Booking>, i64), AppError>;
    /// Occupying (pending/confirmed) bookings for one coach on one date.
    async fn list_occupying(&self, coach_id: &str, date: NaiveDate) -> Result<Vec<Booking>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
}

#[async_trait]
pub trait CoachRepository: Send + Sync {
    async fn create(&self, coach: &Coach) -> Result<Coach, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Coach>, AppError>;
    async fn list(&self) -> Result<Vec<Coach>, AppError>;
    async fn update(&self, coach: &Coach) -> Result<Coach, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ProgramRepository: Send + Sync {
    async fn create(&self, program: &Program) -> Result<Program, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Program>, AppError>;
    async fn list(&self) -> Result<Vec<Program>, AppError>;
    async fn update(&self, program: &Program) -> Result<Program, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, student: &Student) -> Result<Student, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, AppError>;
    async fn list(&self) -> Result<Vec<Student>, AppError>;
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn create(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Testimonial>, AppError>;
    async fn list(&self, published_only: bool) -> Result<Vec<Testimonial>, AppError>;
    async fn update(&self, testimonial: &Testimonial) -> Result<Testimonial, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait FacilityRepository: Send + Sync {
    async fn create(&self, facility: &Facility) -> Result<Facility, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Facility>, AppError>;
    async fn list(&self) -> Result<Vec<Facility>, AppError>;
    async fn update(&self, facility: &Facility) -> Result<Facility, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn create(&self, image: &GalleryImage) -> Result<GalleryImage, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<GalleryImage>, AppError>;
    async fn list(&self) -> Result<Vec<GalleryImage>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn create(&self, achievement: &Achievement) -> Result<Achievement, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Achievement>, AppError>;
    async fn list(&self) -> Result<Vec<Achievement>, AppError>;
    async fn update(&self, achievement: &Achievement) -> Result<Achievement, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: &ContactMessage) -> Result<ContactMessage, AppError>;
    async fn list(&self) -> Result<Vec<ContactMessage>, AppError>;
}
