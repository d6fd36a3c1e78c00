use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::{appointment_routes, availability_routes, AppointmentState};
use appointment_cell::store::AppointmentStore;
use dentist_cell::router::{dentist_routes, DentistState};
use dentist_cell::store::DentistStore;

pub fn create_router(
    dentists: Arc<dyn DentistStore>,
    appointments: Arc<dyn AppointmentStore>,
) -> Router {
    let appointment_state = AppointmentState {
        appointments,
        dentists: dentists.clone(),
    };

    Router::new()
        .route("/", get(|| async { "Dental booking API is running!" }))
        .nest("/dentists", dentist_routes(DentistState { store: dentists }))
        .nest("/appointments", appointment_routes(appointment_state.clone()))
        .nest("/availability", availability_routes(appointment_state))
}
