use academy_backend::{
    api::router::create_router,
    config::Config,
    domain::services::scheduling::SlotGrid,
    infra::repositories::{
        sqlite_achievement_repo::SqliteAchievementRepo,
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_coach_repo::SqliteCoachRepo,
        sqlite_contact_repo::SqliteContactRepo,
        sqlite_facility_repo::SqliteFacilityRepo,
        sqlite_gallery_repo::SqliteGalleryRepo,
        sqlite_program_repo::SqliteProgramRepo,
        sqlite_student_repo::SqliteStudentRepo,
        sqlite_testimonial_repo::SqliteTestimonialRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use uuid::Uuid;

pub const ADMIN_TOKEN: &str = "test-admin-token";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_token: ADMIN_TOKEN.to_string(),
            slot_grid: SlotGrid::default(),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            coach_repo: Arc::new(SqliteCoachRepo::new(pool.clone())),
            program_repo: Arc::new(SqliteProgramRepo::new(pool.clone())),
            student_repo: Arc::new(SqliteStudentRepo::new(pool.clone())),
            testimonial_repo: Arc::new(SqliteTestimonialRepo::new(pool.clone())),
            facility_repo: Arc::new(SqliteFacilityRepo::new(pool.clone())),
            gallery_repo: Arc::new(SqliteGalleryRepo::new(pool.clone())),
            achievement_repo: Arc::new(SqliteAchievementRepo::new(pool.clone())),
            contact_repo: Arc::new(SqliteContactRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

#[allow(dead_code)]
pub async fn send(
    app: &TestApp,
    method: &str,
    uri: &str,
    body: Option<Value>,
    admin: bool,
) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);

    if admin {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.router.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Seeds one coach, one program and one student, returning their ids.
#[allow(dead_code)]
pub async fn seed_refs(app: &TestApp) -> (String, String, String) {
    let coach_res = send(app, "POST", "/api/coaches", Some(serde_json::json!({
        "name": "R. Sharma",
        "specialization": "Batting",
        "experience_years": 12
    })), true).await;
    let coach = parse_body(coach_res).await;

    let program_res = send(app, "POST", "/api/programs", Some(serde_json::json!({
        "name": "Junior Cricket",
        "age_group": "8-12",
        "price": 2500
    })), true).await;
    let program = parse_body(program_res).await;

    let student_res = send(app, "POST", "/api/students", Some(serde_json::json!({
        "name": "A. Kumar",
        "email": "a.kumar@example.com",
        "age": 10
    })), false).await;
    let student = parse_body(student_res).await;

    (
        coach["id"].as_str().unwrap().to_string(),
        program["id"].as_str().unwrap().to_string(),
        student["id"].as_str().unwrap().to_string(),
    )
}
