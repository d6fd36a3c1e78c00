// libs/appointment-cell/src/services/booking.rs
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use dentist_cell::models::Dentist;
use dentist_cell::services::directory::DentistDirectoryService;
use dentist_cell::store::DentistStore;
use shared_models::ids::PublicId;

use crate::models::{
    AppointmentError, AppointmentStatus, AppointmentView, BookAppointmentRequest,
    BookingConfirmation, NewAppointment,
};
use crate::services::validation;
use crate::store::AppointmentStore;

/// Validates booking requests, checks for slot conflicts and creates the
/// appointment record.
pub struct BookingService {
    appointments: Arc<dyn AppointmentStore>,
    directory: DentistDirectoryService,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl BookingService {
    pub fn new(appointments: Arc<dyn AppointmentStore>, dentists: Arc<dyn DentistStore>) -> Self {
        Self {
            appointments,
            directory: DentistDirectoryService::new(dentists),
        }
    }

    /// The validation ladder runs in a fixed order; the first failure wins
    /// and each step reports its own message.
    pub async fn book(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<BookingConfirmation, AppointmentError> {
        let (Some(dentist_id), Some(date), Some(time), Some(patient)) = (
            non_empty(request.dentist_id.as_deref()),
            non_empty(request.date.as_deref()),
            non_empty(request.time.as_deref()),
            request.patient.as_ref(),
        ) else {
            return Err(AppointmentError::ValidationError(
                "All fields are required".to_string(),
            ));
        };

        let (Some(name), Some(email), Some(phone)) = (
            non_empty(patient.name.as_deref()),
            non_empty(patient.email.as_deref()),
            non_empty(patient.phone.as_deref()),
        ) else {
            return Err(AppointmentError::ValidationError(
                "Patient name, email, and phone are required".to_string(),
            ));
        };

        if !validation::is_valid_date_shape(date) {
            return Err(AppointmentError::ValidationError(
                "Invalid date format. Use YYYY-MM-DD".to_string(),
            ));
        }

        if !validation::is_valid_time_shape(time) {
            return Err(AppointmentError::ValidationError(
                "Invalid time format. Use HH:MM".to_string(),
            ));
        }

        let calendar_date = validation::parse_calendar_date(date)
            .ok_or_else(|| AppointmentError::ValidationError("Invalid date".to_string()))?;

        let dentist = self.directory.resolve(dentist_id).await?;

        // Early, friendlier rejection; the storage-layer unique index
        // remains authoritative if a concurrent booking slips past this.
        if let Some(existing) = self
            .appointments
            .find_conflict(dentist.id, calendar_date, time)
            .await?
        {
            warn!(
                "Slot {} {} already booked for dentist {} (appointment {})",
                date, time, dentist.id, existing.id
            );
            return Err(AppointmentError::SlotTaken);
        }

        let (day_start, _) = crate::store::day_bounds(calendar_date);
        let new = NewAppointment {
            dentist_id: dentist.id,
            date: day_start,
            time: time.to_string(),
            patient_name: name.to_string(),
            patient_email: email.to_lowercase(),
            patient_phone: phone.to_string(),
            status: AppointmentStatus::Confirmed,
        };

        let appointment = self.appointments.create(new).await?;

        info!(
            "Booked appointment {} for dentist {} on {} at {}",
            appointment.id, dentist.id, date, time
        );

        Ok(BookingConfirmation {
            appointment_id: PublicId::appointment(appointment.id).to_string(),
            status: appointment.status,
        })
    }

    /// All appointments joined with their dentist's display fields.
    pub async fn list_appointments(&self) -> Result<Vec<AppointmentView>, AppointmentError> {
        let appointments = self.appointments.list_all().await?;
        let dentists = self.directory.list_all().await?;
        let by_id: HashMap<Uuid, &Dentist> = dentists.iter().map(|d| (d.id, d)).collect();

        Ok(appointments
            .iter()
            .map(|a| AppointmentView::from_record(a, by_id.get(&a.dentist_id).copied()))
            .collect())
    }
}
