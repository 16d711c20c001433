use std::sync::Arc;

use common::{Registration, RegistrationStats, RegistrationStatus};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use super::error::ServiceError;
use super::validation::validate_registration;
use crate::models::registration::CreateRegistrationRequest;
use crate::store::{RegistrationStore, StoreError};

/// Domain rules on top of a [`RegistrationStore`].
///
/// The duplicate check and the insert that follows it run under a single
/// writer lock, so two concurrent submissions for the same student cannot
/// both pass the check within one process. Stores with a uniqueness
/// constraint report a conflict if another process wins the race.
#[derive(Clone)]
pub struct RegistrationService {
    store: Arc<dyn RegistrationStore>,
    write_lock: Arc<Mutex<()>>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Validate and persist a submission.
    #[instrument(skip(self, payload))]
    pub async fn register(
        &self,
        payload: &CreateRegistrationRequest,
    ) -> Result<Registration, ServiceError> {
        let new = validate_registration(payload).map_err(ServiceError::Validation)?;
        let key = new.dedup_key();

        let _guard = self.write_lock.lock().await;

        let existing = self.store.list_registrations().await?;
        if existing.iter().any(|r| r.dedup_key() == key) {
            info!(grade = %key.grade, division = %key.division, "Rejected duplicate registration");
            return Err(ServiceError::Duplicate);
        }

        let created = self
            .store
            .create_registration(new)
            .await
            .map_err(|e| match e {
                StoreError::Conflict(detail) => {
                    warn!("Duplicate registration caught by storage constraint: {detail}");
                    ServiceError::Duplicate
                }
                other => ServiceError::Storage(other),
            })?;

        info!(id = created.id, committee = %created.committee, "Registration created");
        Ok(created)
    }

    /// All registrations, newest first.
    pub async fn list(&self) -> Result<Vec<Registration>, ServiceError> {
        Ok(self.store.list_registrations().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Registration, ServiceError> {
        self.store
            .get_registration(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Move a registration to `status`. Any status may follow any other.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: i32,
        status: RegistrationStatus,
    ) -> Result<Registration, ServiceError> {
        let updated = self
            .store
            .update_registration_status(id, status)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        info!("Registration status updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> Result<(), ServiceError> {
        if !self.store.delete_registration(id).await? {
            return Err(ServiceError::NotFound(id));
        }

        info!("Registration deleted");
        Ok(())
    }

    pub async fn stats(&self) -> Result<RegistrationStats, ServiceError> {
        Ok(self.store.registration_stats().await?)
    }
}
