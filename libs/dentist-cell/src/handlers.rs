// libs/dentist-cell/src/handlers.rs
use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::DentistView;
use crate::router::DentistState;
use crate::services::directory::DentistDirectoryService;

#[axum::debug_handler]
pub async fn list_dentists(State(state): State<DentistState>) -> Result<Json<Value>, AppError> {
    let directory = DentistDirectoryService::new(state.store.clone());

    let dentists = directory.list_all().await?;
    let views: Vec<DentistView> = dentists.iter().map(DentistView::from_record).collect();

    Ok(Json(json!(views)))
}
