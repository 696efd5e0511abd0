use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    AchievementRepository, BookingRepository, CoachRepository, ContactRepository,
    FacilityRepository, GalleryRepository, ProgramRepository, StudentRepository,
    TestimonialRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub coach_repo: Arc<dyn CoachRepository>,
    pub program_repo: Arc<dyn ProgramRepository>,
    pub student_repo: Arc<dyn StudentRepository>,
    pub testimonial_repo: Arc<dyn TestimonialRepository>,
    pub facility_repo: Arc<dyn FacilityRepository>,
    pub gallery_repo: Arc<dyn GalleryRepository>,
    pub achievement_repo: Arc<dyn AchievementRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
}
