mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{seed_refs, send, TestApp};
use serde_json::json;

fn tomorrow() -> String {
    (Utc::now().date_naive() + Duration::days(1)).format("%Y-%m-%d").to_string()
}

#[tokio::test]
async fn test_concurrent_identical_creates_yield_one_success() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;

    let payload = json!({
        "student_id": refs.2,
        "program_id": refs.1,
        "coach_id": refs.0,
        "booking_date": tomorrow(),
        "start_time": "10:00",
        "end_time": "11:00"
    });

    let (first, second) = tokio::join!(
        send(&app, "POST", "/api/bookings", Some(payload.clone()), false),
        send(&app, "POST", "/api/bookings", Some(payload.clone()), false),
    );

    let statuses = [first.status(), second.status()];
    assert!(statuses.contains(&StatusCode::CREATED), "statuses: {:?}", statuses);
    assert!(statuses.contains(&StatusCode::CONFLICT), "statuses: {:?}", statuses);
}

#[tokio::test]
async fn test_concurrent_overlapping_creates_yield_one_success() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = tomorrow();

    let base = json!({
        "student_id": refs.2,
        "program_id": refs.1,
        "coach_id": refs.0,
        "booking_date": date
    });

    let mut early = base.clone();
    early["start_time"] = json!("10:00");
    early["end_time"] = json!("11:00");

    let mut late = base.clone();
    late["start_time"] = json!("10:30");
    late["end_time"] = json!("11:30");

    let (first, second) = tokio::join!(
        send(&app, "POST", "/api/bookings", Some(early), false),
        send(&app, "POST", "/api/bookings", Some(late), false),
    );

    let statuses = [first.status(), second.status()];
    assert!(statuses.contains(&StatusCode::CREATED), "statuses: {:?}", statuses);
    assert!(statuses.contains(&StatusCode::CONFLICT), "statuses: {:?}", statuses);
}
