// libs/dentist-cell/src/services/directory.rs
use std::sync::Arc;

use tracing::debug;

use shared_models::ids::{IdKind, PublicId};

use crate::models::{Dentist, DentistError};
use crate::store::DentistStore;

/// Read-only lookup over the injected dentist store.
pub struct DentistDirectoryService {
    store: Arc<dyn DentistStore>,
}

impl DentistDirectoryService {
    pub fn new(store: Arc<dyn DentistStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Dentist>, DentistError> {
        self.store.list_all().await
    }

    /// Resolve a client-supplied dentist id, prefixed or bare. An id that
    /// does not parse cannot match any record, so it resolves to NotFound.
    pub async fn resolve(&self, id: &str) -> Result<Dentist, DentistError> {
        debug!("Resolving dentist id {}", id);

        let public_id =
            PublicId::parse(IdKind::Dentist, id).map_err(|_| DentistError::NotFound)?;

        self.store
            .find(public_id.raw())
            .await?
            .ok_or(DentistError::NotFound)
    }
}
