// libs/appointment-cell/src/services/availability.rs
use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use dentist_cell::services::directory::DentistDirectoryService;
use dentist_cell::store::DentistStore;

use crate::models::{AppointmentError, AvailabilityResponse};
use crate::services::slots::SLOT_GRID;
use crate::services::validation;
use crate::store::AppointmentStore;

/// Computes open slots for a date by subtracting booked times from the
/// canonical grid.
pub struct AvailabilityService {
    appointments: Arc<dyn AppointmentStore>,
    directory: DentistDirectoryService,
}

impl AvailabilityService {
    pub fn new(appointments: Arc<dyn AppointmentStore>, dentists: Arc<dyn DentistStore>) -> Self {
        Self {
            appointments,
            directory: DentistDirectoryService::new(dentists),
        }
    }

    /// `dentist_id` is echoed back exactly as supplied, and only when
    /// supplied.
    pub async fn get_availability(
        &self,
        date: Option<&str>,
        dentist_id: Option<&str>,
    ) -> Result<AvailabilityResponse, AppointmentError> {
        let date = date.filter(|d| !d.is_empty()).ok_or_else(|| {
            AppointmentError::ValidationError("Date parameter is required".to_string())
        })?;
        // An empty dentistId parameter means no filter, same as an absent one.
        let dentist_id = dentist_id.filter(|d| !d.is_empty());

        if !validation::is_valid_date_shape(date) {
            return Err(AppointmentError::ValidationError(
                "Invalid date format. Use YYYY-MM-DD".to_string(),
            ));
        }

        let calendar_date = validation::parse_calendar_date(date)
            .ok_or_else(|| AppointmentError::ValidationError("Invalid date".to_string()))?;

        let dentist = match dentist_id {
            Some(id) => Some(self.directory.resolve(id).await?),
            None => None,
        };

        let booked = self
            .appointments
            .find_booked(calendar_date, dentist.as_ref().map(|d| d.id))
            .await?;
        let booked_times: HashSet<&str> = booked.iter().map(|b| b.time.as_str()).collect();

        let available_slots: Vec<String> = SLOT_GRID
            .iter()
            .filter(|slot| !booked_times.contains(*slot))
            .map(|slot| slot.to_string())
            .collect();

        debug!(
            "Availability for {}: {} of {} slots open",
            date,
            available_slots.len(),
            SLOT_GRID.len()
        );

        Ok(AvailabilityResponse {
            date: date.to_string(),
            available_slots,
            dentist_id: dentist_id.map(String::from),
        })
    }
}
