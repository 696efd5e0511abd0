use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

use crate::api::handlers::{
    achievement, booking, coach, contact, facility, gallery, health, program, student, testimonial,
};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Public site content
        .route("/api/coaches", get(coach::list_coaches).post(coach::create_coach))
        .route("/api/coaches/{coach_id}", get(coach::get_coach).put(coach::update_coach).delete(coach::delete_coach))
        .route("/api/programs", get(program::list_programs).post(program::create_program))
        .route("/api/programs/{program_id}", get(program::get_program).put(program::update_program).delete(program::delete_program))
        .route("/api/facilities", get(facility::list_facilities).post(facility::create_facility))
        .route("/api/facilities/{facility_id}", put(facility::update_facility).delete(facility::delete_facility))
        .route("/api/gallery", get(gallery::list_gallery).post(gallery::create_gallery_image))
        .route("/api/gallery/{image_id}", delete(gallery::delete_gallery_image))
        .route("/api/achievements", get(achievement::list_achievements).post(achievement::create_achievement))
        .route("/api/achievements/{achievement_id}", put(achievement::update_achievement).delete(achievement::delete_achievement))
        .route("/api/testimonials", get(testimonial::list_testimonials).post(testimonial::create_testimonial))
        .route("/api/testimonials/all", get(testimonial::list_all_testimonials))
        .route("/api/testimonials/{testimonial_id}", put(testimonial::update_testimonial).delete(testimonial::delete_testimonial))

        // Students & contact
        .route("/api/students", get(student::list_students).post(student::create_student))
        .route("/api/students/{student_id}", get(student::get_student))
        .route("/api/contact", get(contact::list_contact_messages).post(contact::submit_contact))

        // Booking flow
        .route("/api/bookings/available-slots", get(booking::available_slots))
        .route("/api/bookings", get(booking::list_bookings).post(booking::create_booking))
        .route("/api/bookings/{booking_id}", get(booking::get_booking).put(booking::update_booking).delete(booking::cancel_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
