// libs/dentist-cell/src/store.rs
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Method;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared_database::SupabaseClient;

use crate::models::{Dentist, DentistError};

/// Injected persistence interface for dentist records. `list_all` returns
/// records in insertion order.
#[async_trait]
pub trait DentistStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Dentist>, DentistError>;
    async fn find(&self, id: Uuid) -> Result<Option<Dentist>, DentistError>;
}

pub struct SupabaseDentistStore {
    client: Arc<SupabaseClient>,
}

impl SupabaseDentistStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DentistStore for SupabaseDentistStore {
    async fn list_all(&self) -> Result<Vec<Dentist>, DentistError> {
        let dentists = self
            .client
            .request(
                Method::GET,
                "/rest/v1/dentists?select=*&order=created_at.asc",
                None,
            )
            .await?;

        Ok(dentists)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Dentist>, DentistError> {
        let mut rows: Vec<Dentist> = self
            .client
            .request(
                Method::GET,
                &format!("/rest/v1/dentists?id=eq.{}&limit=1", id),
                None,
            )
            .await?;

        Ok(rows.pop())
    }
}

/// In-process store used by tests and local development.
#[derive(Default)]
pub struct MemoryDentistStore {
    dentists: RwLock<Vec<Dentist>>,
}

impl MemoryDentistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, name: &str, specialty: &str) -> Dentist {
        let dentist = Dentist {
            id: Uuid::new_v4(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            created_at: Utc::now(),
        };

        self.dentists.write().await.push(dentist.clone());
        dentist
    }
}

#[async_trait]
impl DentistStore for MemoryDentistStore {
    async fn list_all(&self) -> Result<Vec<Dentist>, DentistError> {
        Ok(self.dentists.read().await.clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Dentist>, DentistError> {
        Ok(self
            .dentists
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }
}
