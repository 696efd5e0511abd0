mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, seed_refs, send, TestApp};
use serde_json::json;

fn date_in_days(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).format("%Y-%m-%d").to_string()
}

fn booking_payload(
    refs: &(String, String, String),
    date: &str,
    start: &str,
    end: &str,
) -> serde_json::Value {
    json!({
        "student_id": refs.2,
        "program_id": refs.1,
        "coach_id": refs.0,
        "booking_date": date,
        "start_time": start,
        "end_time": end
    })
}

#[tokio::test]
async fn test_create_booking_success() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = date_in_days(1);

    let res = send(&app, "POST", "/api/bookings", Some(json!({
        "student_id": refs.2,
        "program_id": refs.1,
        "coach_id": refs.0,
        "booking_date": date,
        "start_time": "10:00",
        "end_time": "11:00",
        "notes": "First net session"
    })), false).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body = parse_body(res).await;
    assert_eq!(body["booking"]["status"], "pending");
    assert_eq!(body["booking"]["start_time"], "10:00:00");
    assert_eq!(body["booking"]["end_time"], "11:00:00");
    assert_eq!(body["booking"]["notes"], "First net session");
}

#[tokio::test]
async fn test_identical_interval_conflicts() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = date_in_days(1);

    let first = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "10:00", "11:00")), false).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "10:00", "11:00")), false).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = parse_body(second).await;
    assert_eq!(body["message"], "Time slot is already booked");
}

#[tokio::test]
async fn test_adjacent_intervals_are_legal() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = date_in_days(1);

    let first = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "10:00", "11:00")), false).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let before = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "09:00", "10:00")), false).await;
    assert_eq!(before.status(), StatusCode::CREATED);

    let after = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "11:00", "12:00")), false).await;
    assert_eq!(after.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_nested_and_partial_overlaps_conflict() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = date_in_days(1);

    let first = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "13:00", "15:00")), false).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let nested = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "13:30", "14:30")), false).await;
    assert_eq!(nested.status(), StatusCode::CONFLICT);

    let tail = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "14:30", "15:30")), false).await;
    assert_eq!(tail.status(), StatusCode::CONFLICT);

    let head = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "12:30", "13:30")), false).await;
    assert_eq!(head.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_other_coach_and_other_date_do_not_conflict() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = date_in_days(1);

    let first = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "10:00", "11:00")), false).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let other_date = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date_in_days(2), "10:00", "11:00")), false).await;
    assert_eq!(other_date.status(), StatusCode::CREATED);

    let coach_res = send(&app, "POST", "/api/coaches", Some(json!({
        "name": "S. Rao",
        "specialization": "Bowling"
    })), true).await;
    let other_coach = parse_body(coach_res).await;
    let other_refs = (
        other_coach["id"].as_str().unwrap().to_string(),
        refs.1.clone(),
        refs.2.clone(),
    );

    let other = send(&app, "POST", "/api/bookings", Some(booking_payload(&other_refs, &date, "10:00", "11:00")), false).await;
    assert_eq!(other.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_cancelled_booking_does_not_block() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = date_in_days(1);

    let first = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "10:00", "11:00")), false).await;
    let booking_id = parse_body(first).await["booking"]["id"].as_str().unwrap().to_string();

    let cancel = send(&app, "DELETE", &format!("/api/bookings/{}", booking_id), None, true).await;
    assert_eq!(cancel.status(), StatusCode::OK);

    let again = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "10:00", "11:00")), false).await;
    assert_eq!(again.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;

    let res = send(&app, "POST", "/api/bookings", Some(json!({
        "student_id": refs.2,
        "program_id": refs.1,
        "booking_date": date_in_days(1),
        "start_time": "10:00",
        "end_time": "11:00"
    })), false).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "coach_id is required");
}

#[tokio::test]
async fn test_invalid_times_rejected() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = date_in_days(1);

    let backwards = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "11:00", "10:00")), false).await;
    assert_eq!(backwards.status(), StatusCode::BAD_REQUEST);

    let garbage = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, "not-a-time", "11:00")), false).await;
    assert_eq!(garbage.status(), StatusCode::BAD_REQUEST);

    let bad_date = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, "05-2026-01", "10:00", "11:00")), false).await;
    assert_eq!(bad_date.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_references_rejected() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;

    let unknown_coach = (
        "no-such-coach".to_string(),
        refs.1.clone(),
        refs.2.clone(),
    );
    let res = send(&app, "POST", "/api/bookings", Some(booking_payload(&unknown_coach, &date_in_days(1), "10:00", "11:00")), false).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert_eq!(body["message"], "Referenced record does not exist");
}

#[tokio::test]
async fn test_get_booking() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;

    let created = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date_in_days(1), "10:00", "11:00")), false).await;
    let booking_id = parse_body(created).await["booking"]["id"].as_str().unwrap().to_string();

    let found = send(&app, "GET", &format!("/api/bookings/{}", booking_id), None, true).await;
    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(parse_body(found).await["booking"]["id"], booking_id.as_str());

    let missing = send(&app, "GET", "/api/bookings/no-such-id", None, true).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_bookings_pagination_and_filters() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;

    for (days, start, end) in [(1, "09:00", "10:00"), (1, "11:00", "12:00"), (2, "09:00", "10:00")] {
        let res = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date_in_days(days), start, end)), false).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let page1 = send(&app, "GET", "/api/bookings?page=1&limit=2", None, true).await;
    assert_eq!(page1.status(), StatusCode::OK);
    let body = parse_body(page1).await;
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["totalPages"], 2);

    // Later date first, then start_time ascending within the day.
    assert_eq!(body["bookings"][0]["booking_date"], date_in_days(2));
    assert_eq!(body["bookings"][1]["start_time"], "09:00:00");

    let by_date = send(&app, "GET", &format!("/api/bookings?date={}&page=1&limit=10", date_in_days(1)), None, true).await;
    let body = parse_body(by_date).await;
    assert_eq!(body["bookings"].as_array().unwrap().len(), 2);

    let by_status = send(&app, "GET", "/api/bookings?status=pending&page=1&limit=10", None, true).await;
    let body = parse_body(by_status).await;
    assert_eq!(body["pagination"]["total"], 3);

    let none = send(&app, "GET", "/api/bookings?status=completed&page=1&limit=10", None, true).await;
    let body = parse_body(none).await;
    assert_eq!(body["pagination"]["total"], 0);

    let bad_status = send(&app, "GET", "/api/bookings?status=bogus", None, true).await;
    assert_eq!(bad_status.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_transitions() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;

    let created = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date_in_days(1), "10:00", "11:00")), false).await;
    let booking_id = parse_body(created).await["booking"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/bookings/{}", booking_id);

    // pending -> completed skips confirmation and is refused
    let skip = send(&app, "PUT", &uri, Some(json!({"status": "completed"})), true).await;
    assert_eq!(skip.status(), StatusCode::BAD_REQUEST);

    let confirm = send(&app, "PUT", &uri, Some(json!({"status": "confirmed", "notes": "Paid at desk"})), true).await;
    assert_eq!(confirm.status(), StatusCode::OK);
    let body = parse_body(confirm).await;
    assert_eq!(body["booking"]["status"], "confirmed");
    assert_eq!(body["booking"]["notes"], "Paid at desk");

    let complete = send(&app, "PUT", &uri, Some(json!({"status": "completed"})), true).await;
    assert_eq!(complete.status(), StatusCode::OK);

    // completed is terminal
    let reopen = send(&app, "PUT", &uri, Some(json!({"status": "pending"})), true).await;
    assert_eq!(reopen.status(), StatusCode::BAD_REQUEST);

    let missing = send(&app, "PUT", "/api/bookings/no-such-id", Some(json!({"status": "confirmed"})), true).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_completed_booking_cannot_be_cancelled() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;

    let created = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date_in_days(1), "10:00", "11:00")), false).await;
    let booking_id = parse_body(created).await["booking"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/bookings/{}", booking_id);

    send(&app, "PUT", &uri, Some(json!({"status": "confirmed"})), true).await;
    send(&app, "PUT", &uri, Some(json!({"status": "completed"})), true).await;

    let cancel = send(&app, "DELETE", &uri, None, true).await;
    assert_eq!(cancel.status(), StatusCode::BAD_REQUEST);

    let after = send(&app, "GET", &uri, None, true).await;
    assert_eq!(parse_body(after).await["booking"]["status"], "completed");
}

#[tokio::test]
async fn test_cancel_booking() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;

    let created = send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date_in_days(1), "10:00", "11:00")), false).await;
    let booking_id = parse_body(created).await["booking"]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/bookings/{}", booking_id);

    let cancel = send(&app, "DELETE", &uri, None, true).await;
    assert_eq!(cancel.status(), StatusCode::OK);
    assert_eq!(parse_body(cancel).await["message"], "Booking cancelled successfully");

    let after = send(&app, "GET", &uri, None, true).await;
    assert_eq!(parse_body(after).await["booking"]["status"], "cancelled");

    let missing = send(&app, "DELETE", "/api/bookings/no-such-id", None, true).await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = TestApp::new().await;

    let list = send(&app, "GET", "/api/bookings", None, false).await;
    assert_eq!(list.status(), StatusCode::UNAUTHORIZED);

    let update = send(&app, "PUT", "/api/bookings/some-id", Some(json!({"status": "confirmed"})), false).await;
    assert_eq!(update.status(), StatusCode::UNAUTHORIZED);

    let cancel = send(&app, "DELETE", "/api/bookings/some-id", None, false).await;
    assert_eq!(cancel.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_occupying_intervals_never_overlap() {
    let app = TestApp::new().await;
    let refs = seed_refs(&app).await;
    let date = date_in_days(1);

    let attempts = [
        ("09:00", "10:00"),
        ("09:30", "10:30"),
        ("10:00", "11:00"),
        ("10:30", "12:00"),
        ("11:00", "12:00"),
        ("12:00", "13:00"),
        ("12:00", "12:30"),
    ];

    for (start, end) in attempts {
        send(&app, "POST", "/api/bookings", Some(booking_payload(&refs, &date, start, end)), false).await;
    }

    let day = chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").unwrap();
    let occupying = app.state.booking_repo.list_occupying(&refs.0, day).await.unwrap();
    assert!(!occupying.is_empty());

    for a in &occupying {
        for b in &occupying {
            if a.id == b.id {
                continue;
            }
            assert!(
                a.end_time <= b.start_time || b.end_time <= a.start_time,
                "overlapping intervals persisted: [{}, {}) and [{}, {})",
                a.start_time, a.end_time, b.start_time, b.end_time
            );
        }
    }
}
