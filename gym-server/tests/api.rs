//! End-to-end tests driving the full router through `tower::ServiceExt`.
//!
//! Each test builds its own in-memory database with the real migrations
//! and a fixed clock, so derived dates and standings are deterministic.

use axum::Router;
use axum::body::Body;
use chrono::NaiveDate;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use gym_server::db::DbService;
use gym_server::utils::FixedClock;
use gym_server::utils::time::date_to_millis;
use gym_server::{Config, ServerState, routes};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// App frozen at midnight UTC of the given date.
async fn app_at(date: &str) -> Router {
    // One connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    DbService::migrate(&pool).await.unwrap();

    let config = Config::with_overrides("./unused", 0);
    let state =
        ServerState::with_pool(config, pool).with_clock(FixedClock(date_to_millis(d(date))));
    routes::build_app().with_state(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn member_registration_assigns_sequential_ids_and_credentials() {
    let app = app_at("2024-01-25").await;

    let (status, body) = send(&app, "POST", "/api/members", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["member"]["id"], "00001");
    assert_eq!(body["member"]["feesStatus"], "Unpaid");
    assert_eq!(body["member"]["status"], "active");
    assert_eq!(body["member"]["attendanceCount"], 0);
    assert_eq!(body["member"]["dateRegistered"], "2024-01-25");
    assert_eq!(body["member"]["expiryDate"], "2024-02-24");
    assert_eq!(body["credentials"]["username"], "member00001");
    assert_eq!(
        body["credentials"]["password"].as_str().unwrap().len(),
        8
    );

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(json!({"firstName": "Ana", "lastName": "Gomez"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["id"], "00002");
    assert_eq!(body["member"]["name"], "Ana Gomez");
    assert_eq!(body["credentials"]["username"], "member00002");
}

#[tokio::test]
async fn member_create_rejects_unknown_trainer() {
    let app = app_at("2024-01-25").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(json!({"trainerId": "T9"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Trainer ID T9 does not exist. Create the trainer first."
    );
}

#[tokio::test]
async fn payment_flow_derives_due_soon_and_marks_member_paid() {
    let app = app_at("2024-01-25").await;

    send(&app, "POST", "/api/members", Some(json!({}))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        Some(json!({
            "memberId": "00001",
            "memberName": "Member One",
            "amountPay": 50.0,
            "paymentDate": "2024-01-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payment"]["dueDate"], "2024-01-31");
    assert_eq!(body["payment"]["dayRemaining"], "6");
    assert_eq!(body["payment"]["status"], "Due Soon");
    let payment_id = body["payment"]["paymentId"].as_i64().unwrap();

    // The dated payment propagated to the member.
    let (status, member) = send(&app, "GET", "/api/members/00001", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member["feesStatus"], "Paid");
    assert_eq!(member["paymentDate"], "2024-01-01");

    // Clearing the payment date flips the member back to Unpaid but keeps
    // the recorded date.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/payments/{payment_id}"),
        Some(json!({
            "memberId": "00001",
            "memberName": "Member One",
            "amountPay": 50.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payment"]["dayRemaining"], "N/A");
    assert_eq!(body["payment"]["status"], "Not Paid");

    let (_, member) = send(&app, "GET", "/api/members/00001", None).await;
    assert_eq!(member["feesStatus"], "Unpaid");
    assert_eq!(member["paymentDate"], "2024-01-01");
}

#[tokio::test]
async fn payment_update_missing_is_not_found() {
    let app = app_at("2024-01-25").await;

    let (status, body) = send(
        &app,
        "PUT",
        "/api/payments/12345",
        Some(json!({"memberId": "00001"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Payment not found");
}

#[tokio::test]
async fn attendance_is_marked_once_per_day() {
    let app = app_at("2024-01-25").await;

    send(&app, "POST", "/api/members", Some(json!({}))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/attendance",
        Some(json!({"memberId": "00001"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attendance"]["attendanceDate"], "2024-01-25");
    assert_eq!(body["attendance"]["status"], "present");

    // Same member, same day: rejected, counter untouched.
    let (status, body) = send(
        &app,
        "POST",
        "/api/attendance",
        Some(json!({"memberId": "00001"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Attendance already marked for this date");

    let (_, member) = send(&app, "GET", "/api/members/00001", None).await;
    assert_eq!(member["attendanceCount"], 1);
}

#[tokio::test]
async fn trainer_roundtrip_with_issued_credentials() {
    let app = app_at("2024-01-25").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/trainers",
        Some(json!({
            "id": "T1",
            "name": "Sam Lee",
            "specialization": "strength",
            "age": "34"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["trainer"]["id"], "T1");
    assert_eq!(body["trainer"]["age"], 34);
    assert_eq!(body["credentials"]["username"], "trainert1");

    // A member can now be assigned to the trainer.
    let (status, body) = send(
        &app,
        "POST",
        "/api/members",
        Some(json!({"trainerId": "T1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member"]["trainerId"], "T1");

    let (status, members) = send(&app, "GET", "/api/members/trainer/T1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(members.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = app_at("2024-01-25").await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    let (status, body) = send(&app, "GET", "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["database"]["status"], "ok");
}
