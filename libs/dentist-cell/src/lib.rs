pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod store;

pub use models::{Dentist, DentistError, DentistView};
pub use router::DentistState;
pub use services::directory::DentistDirectoryService;
pub use store::{DentistStore, MemoryDentistStore, SupabaseDentistStore};
