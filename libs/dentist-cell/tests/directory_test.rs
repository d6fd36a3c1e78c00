use std::sync::Arc;

use assert_matches::assert_matches;
use uuid::Uuid;

use dentist_cell::models::DentistError;
use dentist_cell::services::directory::DentistDirectoryService;
use dentist_cell::store::MemoryDentistStore;

#[tokio::test]
async fn list_all_preserves_insertion_order() {
    let store = Arc::new(MemoryDentistStore::new());
    store.insert("Dr. Amara Okafor", "Orthodontics").await;
    store.insert("Dr. Lena Fischer", "General Dentistry").await;
    store.insert("Dr. Sam Whittaker", "Endodontics").await;

    let directory = DentistDirectoryService::new(store);
    let dentists = directory.list_all().await.unwrap();

    let names: Vec<&str> = dentists.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Dr. Amara Okafor", "Dr. Lena Fischer", "Dr. Sam Whittaker"]
    );
}

#[tokio::test]
async fn resolve_accepts_prefixed_and_bare_ids() {
    let store = Arc::new(MemoryDentistStore::new());
    let dentist = store.insert("Dr. Amara Okafor", "Orthodontics").await;

    let directory = DentistDirectoryService::new(store);

    let by_prefix = directory
        .resolve(&format!("dentist_{}", dentist.id))
        .await
        .unwrap();
    assert_eq!(by_prefix.id, dentist.id);

    let by_raw = directory.resolve(&dentist.id.to_string()).await.unwrap();
    assert_eq!(by_raw.id, dentist.id);
}

#[tokio::test]
async fn resolve_unknown_id_is_not_found() {
    let store = Arc::new(MemoryDentistStore::new());
    store.insert("Dr. Lena Fischer", "General Dentistry").await;

    let directory = DentistDirectoryService::new(store);

    let missing = directory
        .resolve(&format!("dentist_{}", Uuid::new_v4()))
        .await;
    assert_matches!(missing, Err(DentistError::NotFound));
}

#[tokio::test]
async fn resolve_unparseable_id_is_not_found() {
    let store = Arc::new(MemoryDentistStore::new());
    let directory = DentistDirectoryService::new(store);

    assert_matches!(
        directory.resolve("dentist_not-a-uuid").await,
        Err(DentistError::NotFound)
    );
    assert_matches!(directory.resolve("").await, Err(DentistError::NotFound));
}
