// libs/dentist-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::store::DentistStore;

#[derive(Clone)]
pub struct DentistState {
    pub store: Arc<dyn DentistStore>,
}

pub fn dentist_routes(state: DentistState) -> Router {
    Router::new()
        .route("/", get(handlers::list_dentists))
        .with_state(state)
}
