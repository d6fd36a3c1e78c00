// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::get, Router};

use dentist_cell::store::DentistStore;

use crate::handlers;
use crate::store::AppointmentStore;

#[derive(Clone)]
pub struct AppointmentState {
    pub appointments: Arc<dyn AppointmentStore>,
    pub dentists: Arc<dyn DentistStore>,
}

pub fn appointment_routes(state: AppointmentState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::list_appointments).post(handlers::book_appointment),
        )
        .with_state(state)
}

pub fn availability_routes(state: AppointmentState) -> Router {
    Router::new()
        .route("/", get(handlers::get_availability))
        .with_state(state)
}
