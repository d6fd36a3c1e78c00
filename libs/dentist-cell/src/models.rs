// libs/dentist-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_database::StoreError;
use shared_models::error::AppError;
use shared_models::ids::PublicId;

/// Stored dentist record. Read-only in this system: dentists are seeded
/// out of band and never updated or deleted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dentist {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
    pub created_at: DateTime<Utc>,
}

/// External shape for `GET /dentists`. The raw storage id is replaced by
/// the prefixed public form; storage metadata is not serialized.
#[derive(Debug, Clone, Serialize)]
pub struct DentistView {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl DentistView {
    pub fn from_record(dentist: &Dentist) -> Self {
        Self {
            id: PublicId::dentist(dentist.id).to_string(),
            name: dentist.name.clone(),
            specialty: dentist.specialty.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DentistError {
    #[error("Dentist not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<StoreError> for DentistError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => DentistError::NotFound,
            other => DentistError::Database(other.to_string()),
        }
    }
}

impl From<DentistError> for AppError {
    fn from(err: DentistError) -> Self {
        match err {
            DentistError::NotFound => AppError::NotFound("Dentist not found".to_string()),
            DentistError::Database(msg) => AppError::Database(msg),
        }
    }
}
