// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{AvailabilityResponse, BookAppointmentRequest, BookingConfirmation};
use crate::router::AppointmentState;
use crate::services::availability::AvailabilityService;
use crate::services::booking::BookingService;

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
    #[serde(rename = "dentistId")]
    pub dentist_id: Option<String>,
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentState>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(state.appointments.clone(), state.dentists.clone());

    let appointments = booking_service.list_appointments().await?;

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let booking_service = BookingService::new(state.appointments.clone(), state.dentists.clone());

    let confirmation = booking_service.book(request).await?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}

#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<AppointmentState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let availability_service =
        AvailabilityService::new(state.appointments.clone(), state.dentists.clone());

    let availability = availability_service
        .get_availability(query.date.as_deref(), query.dentist_id.as_deref())
        .await?;

    Ok(Json(availability))
}
