// libs/appointment-cell/src/store.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Method;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_database::SupabaseClient;

use crate::models::{Appointment, AppointmentError, AppointmentStatus, BookedSlot, NewAppointment};

/// Inclusive start and exclusive end of a calendar day in UTC. Queries
/// match `date >= start && date < end` so any stored time-of-day precision
/// falls inside the requested day.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
    let end = date.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc();
    (start, end)
}

/// Injected persistence interface for appointment records.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError>;

    /// Any active appointment occupying the exact (dentist, day, time)
    /// triple. Cancelled records do not block.
    async fn find_conflict(
        &self,
        dentist_id: Uuid,
        date: NaiveDate,
        time: &str,
    ) -> Result<Option<Appointment>, AppointmentError>;

    /// The active (dentist, time) pairs occupying slots on the given day.
    /// Cancelled records do not count, matching `find_conflict`.
    async fn find_booked(
        &self,
        date: NaiveDate,
        dentist_id: Option<Uuid>,
    ) -> Result<Vec<BookedSlot>, AppointmentError>;

    /// Persist a new appointment. The storage layer enforces uniqueness of
    /// the active (dentist, day, time) triple; a violation surfaces as
    /// `SlotTaken`.
    async fn create(&self, new: NewAppointment) -> Result<Appointment, AppointmentError>;
}

pub struct SupabaseAppointmentStore {
    client: Arc<SupabaseClient>,
}

impl SupabaseAppointmentStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AppointmentStore for SupabaseAppointmentStore {
    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let appointments = self
            .client
            .request(
                Method::GET,
                "/rest/v1/appointments?select=*&order=created_at.asc",
                None,
            )
            .await?;

        Ok(appointments)
    }

    async fn find_conflict(
        &self,
        dentist_id: Uuid,
        date: NaiveDate,
        time: &str,
    ) -> Result<Option<Appointment>, AppointmentError> {
        let (start, end) = day_bounds(date);
        debug!(
            "Checking slot conflicts for dentist {} on {} at {}",
            dentist_id, date, time
        );

        let path = format!(
            "/rest/v1/appointments?dentist_id=eq.{}&time=eq.{}&date=gte.{}&date=lt.{}&status=in.(confirmed,pending)&limit=1",
            dentist_id,
            urlencoding::encode(time),
            urlencoding::encode(&start.to_rfc3339()),
            urlencoding::encode(&end.to_rfc3339()),
        );

        let mut rows: Vec<Appointment> = self.client.request(Method::GET, &path, None).await?;
        Ok(rows.pop())
    }

    async fn find_booked(
        &self,
        date: NaiveDate,
        dentist_id: Option<Uuid>,
    ) -> Result<Vec<BookedSlot>, AppointmentError> {
        let (start, end) = day_bounds(date);

        let mut path = format!(
            "/rest/v1/appointments?select=dentist_id,time&date=gte.{}&date=lt.{}&status=in.(confirmed,pending)",
            urlencoding::encode(&start.to_rfc3339()),
            urlencoding::encode(&end.to_rfc3339()),
        );
        if let Some(dentist_id) = dentist_id {
            path.push_str(&format!("&dentist_id=eq.{}", dentist_id));
        }

        let booked = self.client.request(Method::GET, &path, None).await?;
        Ok(booked)
    }

    async fn create(&self, new: NewAppointment) -> Result<Appointment, AppointmentError> {
        let body = serde_json::to_value(&new)
            .map_err(|e| AppointmentError::Database(e.to_string()))?;

        let appointment = self
            .client
            .insert_returning("/rest/v1/appointments", body)
            .await?;

        Ok(appointment)
    }
}

/// In-process store used by tests and local development. `create` applies
/// the same active-triple uniqueness rule the database index enforces.
#[derive(Default)]
pub struct MemoryAppointmentStore {
    appointments: RwLock<Vec<Appointment>>,
}

impl MemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status changes are driven externally in this system; tests use this
    /// to cancel an appointment.
    pub async fn set_status(&self, id: Uuid, status: AppointmentStatus) {
        let mut appointments = self.appointments.write().await;
        if let Some(appointment) = appointments.iter_mut().find(|a| a.id == id) {
            appointment.status = status;
            appointment.updated_at = Utc::now();
        }
    }
}

fn occupies_slot(
    appointment: &Appointment,
    dentist_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    time: &str,
) -> bool {
    appointment.dentist_id == dentist_id
        && appointment.date >= start
        && appointment.date < end
        && appointment.time == time
        && appointment.status.is_active()
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        Ok(self.appointments.read().await.clone())
    }

    async fn find_conflict(
        &self,
        dentist_id: Uuid,
        date: NaiveDate,
        time: &str,
    ) -> Result<Option<Appointment>, AppointmentError> {
        let (start, end) = day_bounds(date);

        Ok(self
            .appointments
            .read()
            .await
            .iter()
            .find(|a| occupies_slot(a, dentist_id, start, end, time))
            .cloned())
    }

    async fn find_booked(
        &self,
        date: NaiveDate,
        dentist_id: Option<Uuid>,
    ) -> Result<Vec<BookedSlot>, AppointmentError> {
        let (start, end) = day_bounds(date);

        Ok(self
            .appointments
            .read()
            .await
            .iter()
            .filter(|a| a.date >= start && a.date < end && a.status.is_active())
            .filter(|a| dentist_id.map_or(true, |id| a.dentist_id == id))
            .map(|a| BookedSlot {
                dentist_id: a.dentist_id,
                time: a.time.clone(),
            })
            .collect())
    }

    async fn create(&self, new: NewAppointment) -> Result<Appointment, AppointmentError> {
        let mut appointments = self.appointments.write().await;

        let (start, end) = day_bounds(new.date.date_naive());
        if appointments
            .iter()
            .any(|a| occupies_slot(a, new.dentist_id, start, end, &new.time))
        {
            return Err(AppointmentError::SlotTaken);
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            dentist_id: new.dentist_id,
            date: new.date,
            time: new.time,
            patient_name: new.patient_name,
            patient_email: new.patient_email,
            patient_phone: new.patient_phone,
            status: new.status,
            created_at: now,
            updated_at: now,
        };

        appointments.push(appointment.clone());
        Ok(appointment)
    }
}
