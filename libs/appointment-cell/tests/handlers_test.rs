use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use appointment_cell::router::{appointment_routes, availability_routes, AppointmentState};
use appointment_cell::store::MemoryAppointmentStore;
use dentist_cell::models::Dentist;
use dentist_cell::router::{dentist_routes, DentistState};
use dentist_cell::store::MemoryDentistStore;

async fn test_app() -> (Router, Dentist) {
    let dentists = Arc::new(MemoryDentistStore::new());
    let dentist = dentists.insert("Dr. Amara Okafor", "Orthodontics").await;

    let appointments = Arc::new(MemoryAppointmentStore::new());
    let state = AppointmentState {
        appointments,
        dentists: dentists.clone(),
    };

    let app = Router::new()
        .nest("/dentists", dentist_routes(DentistState { store: dentists }))
        .nest("/appointments", appointment_routes(state.clone()))
        .nest("/availability", availability_routes(state));

    (app, dentist)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn booking_body(dentist_id: &str, date: &str, time: &str) -> Value {
    json!({
        "dentistId": dentist_id,
        "date": date,
        "time": time,
        "patient": {
            "name": "Jordan Blake",
            "email": "jordan.blake@example.com",
            "phone": "+1-555-0100"
        }
    })
}

#[tokio::test]
async fn list_dentists_returns_prefixed_ids() {
    let (app, dentist) = test_app().await;

    let response = app.oneshot(get("/dentists")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!([{
            "id": format!("dentist_{}", dentist.id),
            "name": "Dr. Amara Okafor",
            "specialty": "Orthodontics"
        }])
    );
}

#[tokio::test]
async fn booking_returns_201_then_409_for_the_same_slot() {
    let (app, dentist) = test_app().await;
    let dentist_id = format!("dentist_{}", dentist.id);

    let first = app
        .clone()
        .oneshot(post_json(
            "/appointments",
            booking_body(&dentist_id, "2024-06-01", "09:00"),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let confirmation = json_body(first).await;
    assert!(confirmation["appointmentId"]
        .as_str()
        .unwrap()
        .starts_with("appt_"));
    assert_eq!(confirmation["status"], "confirmed");

    let second = app
        .oneshot(post_json(
            "/appointments",
            booking_body(&dentist_id, "2024-06-01", "09:00"),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let body = json_body(second).await;
    assert_eq!(body["error"], "This time slot is already booked");
}

#[tokio::test]
async fn booking_validation_failures_map_to_400() {
    let (app, dentist) = test_app().await;
    let dentist_id = format!("dentist_{}", dentist.id);

    let missing_zero = app
        .clone()
        .oneshot(post_json(
            "/appointments",
            booking_body(&dentist_id, "2024-06-01", "9:00"),
        ))
        .await
        .unwrap();
    assert_eq!(missing_zero.status(), StatusCode::BAD_REQUEST);

    let impossible_date = app
        .clone()
        .oneshot(post_json(
            "/appointments",
            booking_body(&dentist_id, "2024-02-30", "09:00"),
        ))
        .await
        .unwrap();
    assert_eq!(impossible_date.status(), StatusCode::BAD_REQUEST);

    let no_patient = app
        .oneshot(post_json(
            "/appointments",
            json!({ "dentistId": dentist_id, "date": "2024-06-01", "time": "09:00" }),
        ))
        .await
        .unwrap();
    assert_eq!(no_patient.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_dentist_maps_to_404() {
    let (app, _) = test_app().await;
    let unknown = format!("dentist_{}", Uuid::new_v4());

    let booking = app
        .clone()
        .oneshot(post_json(
            "/appointments",
            booking_body(&unknown, "2024-06-01", "09:00"),
        ))
        .await
        .unwrap();
    assert_eq!(booking.status(), StatusCode::NOT_FOUND);

    let availability = app
        .oneshot(get(&format!(
            "/availability?date=2024-06-01&dentistId={}",
            unknown
        )))
        .await
        .unwrap();
    assert_eq!(availability.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn availability_excludes_booked_slot_and_echoes_dentist_id() {
    let (app, dentist) = test_app().await;
    let dentist_id = format!("dentist_{}", dentist.id);

    let created = app
        .clone()
        .oneshot(post_json(
            "/appointments",
            booking_body(&dentist_id, "2024-06-01", "10:30"),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(get(&format!(
            "/availability?date=2024-06-01&dentistId={}",
            dentist_id
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["date"], "2024-06-01");
    assert_eq!(body["dentistId"], dentist_id);

    let slots: Vec<&str> = body["availableSlots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(slots.len(), 16);
    assert!(!slots.contains(&"10:30"));

    // Without a dentist filter the key is omitted entirely.
    let unfiltered = app
        .oneshot(get("/availability?date=2024-06-02"))
        .await
        .unwrap();
    let body = json_body(unfiltered).await;
    assert!(body.get("dentistId").is_none());
}

#[tokio::test]
async fn availability_without_date_is_400() {
    let (app, _) = test_app().await;

    let response = app.oneshot(get("/availability")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Date parameter is required");
}

#[tokio::test]
async fn created_appointment_round_trips_through_listing() {
    let (app, dentist) = test_app().await;
    let dentist_id = format!("dentist_{}", dentist.id);

    let created = app
        .clone()
        .oneshot(post_json(
            "/appointments",
            booking_body(&dentist_id, "2024-06-01", "15:00"),
        ))
        .await
        .unwrap();
    let confirmation = json_body(created).await;
    let appointment_id = confirmation["appointmentId"].as_str().unwrap().to_string();

    let listing = app.oneshot(get("/appointments")).await.unwrap();
    assert_eq!(listing.status(), StatusCode::OK);

    let body = json_body(listing).await;
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = &entries[0];
    assert_eq!(entry["appointmentId"], appointment_id);
    assert_eq!(entry["dentist"]["id"], dentist_id);
    assert_eq!(entry["dentist"]["name"], "Dr. Amara Okafor");
    assert_eq!(entry["dentist"]["specialty"], "Orthodontics");
    assert_eq!(entry["date"], "2024-06-01");
    assert_eq!(entry["time"], "15:00");
    assert_eq!(entry["patient_name"], "Jordan Blake");
    assert_eq!(entry["patient_email"], "jordan.blake@example.com");
    assert_eq!(entry["patient_phone"], "+1-555-0100");
    assert_eq!(entry["status"], "confirmed");
}
