mod error;
mod traits;

pub mod database;
pub mod memory;

use std::sync::Arc;

use tracing::info;

pub use database::DatabaseStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use traits::{NewUser, RegistrationStore, User, UserStore};

use crate::config::{StorageBackend, StorageConfig};

/// One storage backend exposed through both store interfaces.
#[derive(Clone)]
pub struct Stores {
    pub registrations: Arc<dyn RegistrationStore>,
    pub users: Arc<dyn UserStore>,
}

impl Stores {
    pub fn from_shared<S>(store: Arc<S>) -> Self
    where
        S: RegistrationStore + UserStore + 'static,
    {
        Self {
            registrations: store.clone(),
            users: store,
        }
    }

    pub fn memory() -> Self {
        Self::from_shared(Arc::new(MemoryStore::new()))
    }
}

/// Open the backend selected by configuration.
pub async fn connect(config: &StorageConfig) -> Result<Stores, StoreError> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory registration store");
            Ok(Stores::memory())
        }
        StorageBackend::Database => {
            let db_config = config.database.as_ref().ok_or_else(|| {
                StoreError::Backend(
                    "storage.database must be set when storage.backend is \"database\"".into(),
                )
            })?;
            let db = crate::database::init_db(db_config).await?;
            info!("Using database registration store");
            Ok(Stores::from_shared(Arc::new(DatabaseStore::new(db))))
        }
    }
}
