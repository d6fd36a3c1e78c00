// libs/appointment-cell/src/models.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dentist_cell::models::{Dentist, DentistError, DentistView};
use shared_database::StoreError;
use shared_models::error::AppError;
use shared_models::ids::PublicId;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// Stored appointment record. `date` holds midnight UTC of the calendar
/// date; the time-of-day label lives in `time`. Records are never
/// physically deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub dentist_id: Uuid,
    pub date: DateTime<Utc>,
    pub time: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a create; the id and timestamps are storage-generated.
#[derive(Debug, Clone, Serialize)]
pub struct NewAppointment {
    pub dentist_id: Uuid,
    pub date: DateTime<Utc>,
    pub time: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
    Pending,
}

impl AppointmentStatus {
    /// Active appointments block their slot; cancelled ones free it.
    pub fn is_active(&self) -> bool {
        matches!(self, AppointmentStatus::Confirmed | AppointmentStatus::Pending)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Pending => write!(f, "pending"),
        }
    }
}

/// Projection used by availability queries: the booked (dentist, time)
/// pairs for one calendar day.
#[derive(Debug, Clone, Deserialize)]
pub struct BookedSlot {
    pub dentist_id: Uuid,
    pub time: String,
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Booking request body. Every field is optional so the booking service
/// owns the validation ladder and missing input maps to a 400 with a
/// message, not a framework rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookAppointmentRequest {
    #[serde(rename = "dentistId")]
    pub dentist_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub patient: Option<PatientDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    #[serde(rename = "appointmentId")]
    pub appointment_id: String,
    pub status: AppointmentStatus,
}

/// External shape for `GET /appointments`: the record joined with its
/// dentist's display fields, ids in prefixed form, storage metadata
/// stripped.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentView {
    #[serde(rename = "appointmentId")]
    pub appointment_id: String,
    pub dentist: Option<DentistView>,
    pub date: String,
    pub time: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub status: AppointmentStatus,
}

impl AppointmentView {
    pub fn from_record(appointment: &Appointment, dentist: Option<&Dentist>) -> Self {
        Self {
            appointment_id: PublicId::appointment(appointment.id).to_string(),
            dentist: dentist.map(DentistView::from_record),
            date: appointment.date.date_naive().format("%Y-%m-%d").to_string(),
            time: appointment.time.clone(),
            patient_name: appointment.patient_name.clone(),
            patient_email: appointment.patient_email.clone(),
            patient_phone: appointment.patient_phone.clone(),
            status: appointment.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityResponse {
    pub date: String,
    #[serde(rename = "availableSlots")]
    pub available_slots: Vec<String>,
    #[serde(rename = "dentistId", skip_serializing_if = "Option::is_none")]
    pub dentist_id: Option<String>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Dentist not found")]
    DentistNotFound,

    #[error("This time slot is already booked")]
    SlotTaken,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<StoreError> for AppointmentError {
    fn from(err: StoreError) -> Self {
        match err {
            // The storage layer's unique index is the authoritative
            // conflict signal.
            StoreError::Duplicate(_) => AppointmentError::SlotTaken,
            other => AppointmentError::Database(other.to_string()),
        }
    }
}

impl From<DentistError> for AppointmentError {
    fn from(err: DentistError) -> Self {
        match err {
            DentistError::NotFound => AppointmentError::DentistNotFound,
            DentistError::Database(msg) => AppointmentError::Database(msg),
        }
    }
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::DentistNotFound => {
                AppError::NotFound("Dentist not found".to_string())
            }
            AppointmentError::SlotTaken => {
                AppError::Conflict("This time slot is already booked".to_string())
            }
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            AppointmentError::Database(msg) => AppError::Database(msg),
        }
    }
}
