pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod store;

pub use models::{
    Appointment, AppointmentError, AppointmentStatus, AppointmentView, AvailabilityResponse,
    BookAppointmentRequest, BookedSlot, BookingConfirmation, NewAppointment, PatientDetails,
};
pub use router::AppointmentState;
pub use services::availability::AvailabilityService;
pub use services::booking::BookingService;
pub use services::slots::SLOT_GRID;
pub use store::{AppointmentStore, MemoryAppointmentStore, SupabaseAppointmentStore};
