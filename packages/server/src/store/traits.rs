use async_trait::async_trait;
use common::{NewRegistration, Registration, RegistrationStats, RegistrationStatus};

use super::error::StoreError;

/// Owner of the registration collection and of registration identity.
///
/// Stores know nothing about the one-registration-per-student rule; that is
/// enforced by [`RegistrationService`](crate::service::RegistrationService).
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Persist a new registration with a fresh id, `pending` status and the current time.
    async fn create_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<Registration, StoreError>;

    /// Snapshot of every registration, newest first.
    async fn list_registrations(&self) -> Result<Vec<Registration>, StoreError>;

    async fn get_registration(&self, id: i32) -> Result<Option<Registration>, StoreError>;

    /// Replace the status of a registration, leaving every other field untouched.
    ///
    /// Returns `None` if no registration has the given id.
    async fn update_registration_status(
        &self,
        id: i32,
        status: RegistrationStatus,
    ) -> Result<Option<Registration>, StoreError>;

    /// Delete a registration.
    ///
    /// Returns `true` if a registration was deleted, `false` if it did not exist.
    async fn delete_registration(&self, id: i32) -> Result<bool, StoreError>;

    /// Counts per status over the current contents, computed on every call.
    async fn registration_stats(&self) -> Result<RegistrationStats, StoreError> {
        let registrations = self.list_registrations().await?;
        Ok(registrations.iter().map(|r| r.status).collect())
    }
}

/// Dashboard account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Storage for dashboard accounts. Usernames are unique.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::Conflict`] if the username is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;
}
