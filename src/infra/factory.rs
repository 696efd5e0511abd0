use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::infra::repositories::{
    postgres_achievement_repo::PostgresAchievementRepo, postgres_booking_repo::PostgresBookingRepo,
    postgres_coach_repo::PostgresCoachRepo, postgres_contact_repo::PostgresContactRepo,
    postgres_facility_repo::PostgresFacilityRepo, postgres_gallery_repo::PostgresGalleryRepo,
    postgres_program_repo::PostgresProgramRepo, postgres_student_repo::PostgresStudentRepo,
    postgres_testimonial_repo::PostgresTestimonialRepo,
    sqlite_achievement_repo::SqliteAchievementRepo, sqlite_booking_repo::SqliteBookingRepo,
    sqlite_coach_repo::SqliteCoachRepo, sqlite_contact_repo::SqliteContactRepo,
    sqlite_facility_repo::SqliteFacilityRepo, sqlite_gallery_repo::SqliteGalleryRepo,
    sqlite_program_repo::SqliteProgramRepo, sqlite_student_repo::SqliteStudentRepo,
    sqlite_testimonial_repo::SqliteTestimonialRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            coach_repo: Arc::new(PostgresCoachRepo::new(pool.clone())),
            program_repo: Arc::new(PostgresProgramRepo::new(pool.clone())),
            student_repo: Arc::new(PostgresStudentRepo::new(pool.clone())),
            testimonial_repo: Arc::new(PostgresTestimonialRepo::new(pool.clone())),
            facility_repo: Arc::new(PostgresFacilityRepo::new(pool.clone())),
            gallery_repo: Arc::new(PostgresGalleryRepo::new(pool.clone())),
            achievement_repo: Arc::new(PostgresAchievementRepo::new(pool.clone())),
            contact_repo: Arc::new(PostgresContactRepo::new(pool)),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            coach_repo: Arc::new(SqliteCoachRepo::new(pool.clone())),
            program_repo: Arc::new(SqliteProgramRepo::new(pool.clone())),
            student_repo: Arc::new(SqliteStudentRepo::new(pool.clone())),
            testimonial_repo: Arc::new(SqliteTestimonialRepo::new(pool.clone())),
            facility_repo: Arc::new(SqliteFacilityRepo::new(pool.clone())),
            gallery_repo: Arc::new(SqliteGalleryRepo::new(pool.clone())),
            achievement_repo: Arc::new(SqliteAchievementRepo::new(pool.clone())),
            contact_repo: Arc::new(SqliteContactRepo::new(pool)),
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
