use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use common::{NewRegistration, Registration, RegistrationStatus};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use super::error::StoreError;
use super::traits::{NewUser, RegistrationStore, User, UserStore};

/// Process-local store backed by concurrent maps.
///
/// Ids come from per-collection counters starting at 1. Counters only move
/// forward, so ids of deleted records are never handed out again.
pub struct MemoryStore {
    registrations: DashMap<i32, Registration>,
    next_registration_id: AtomicI32,
    users: DashMap<i32, User>,
    /// username -> user id
    usernames: DashMap<String, i32>,
    next_user_id: AtomicI32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            registrations: DashMap::new(),
            next_registration_id: AtomicI32::new(1),
            users: DashMap::new(),
            usernames: DashMap::new(),
            next_user_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn create_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<Registration, StoreError> {
        let id = self.next_registration_id.fetch_add(1, Ordering::Relaxed);
        let record = registration.into_registration(id, Utc::now());
        self.registrations.insert(id, record.clone());
        Ok(record)
    }

    async fn list_registrations(&self) -> Result<Vec<Registration>, StoreError> {
        let mut all: Vec<Registration> = self
            .registrations
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        // Ids break ties between records created within the same clock tick.
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(all)
    }

    async fn get_registration(&self, id: i32) -> Result<Option<Registration>, StoreError> {
        Ok(self.registrations.get(&id).map(|r| r.value().clone()))
    }

    async fn update_registration_status(
        &self,
        id: i32,
        status: RegistrationStatus,
    ) -> Result<Option<Registration>, StoreError> {
        Ok(self.registrations.get_mut(&id).map(|mut r| {
            r.status = status;
            r.value().clone()
        }))
    }

    async fn delete_registration(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.registrations.remove(&id).is_some())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let Some(id) = self.usernames.get(username).map(|id| *id) else {
            return Ok(None);
        };
        self.get_user(id).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        match self.usernames.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(format!(
                "username '{}' is already taken",
                user.username
            ))),
            Entry::Vacant(slot) => {
                let id = self.next_user_id.fetch_add(1, Ordering::Relaxed);
                let created = User {
                    id,
                    username: user.username,
                    password_hash: user.password_hash,
                };
                // Insert the record before releasing the username slot so a
                // concurrent lookup never resolves to a missing id.
                self.users.insert(id, created.clone());
                slot.insert(id);
                Ok(created)
            }
        }
    }
}
