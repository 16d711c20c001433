use async_trait::async_trait;
use chrono::Utc;
use common::{NewRegistration, Registration, RegistrationStats, RegistrationStatus, normalize_name};
use sea_orm::*;

use super::error::StoreError;
use super::traits::{NewUser, RegistrationStore, User, UserStore};
use crate::entity::{registration, user};

/// Store backed by the `registration` and `user` tables.
///
/// Identity is delegated to the database's auto-increment. The unique index
/// created by [`ensure_indexes`](crate::database::ensure_indexes) turns
/// concurrent duplicate submissions into [`StoreError::Conflict`].
#[derive(Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_err(err: DbErr, what: &str) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint caught on {what} insert: {detail}");
            StoreError::Conflict(format!("{what} already exists"))
        }
        _ => StoreError::from(err),
    }
}

#[async_trait]
impl RegistrationStore for DatabaseStore {
    async fn create_registration(
        &self,
        registration: NewRegistration,
    ) -> Result<Registration, StoreError> {
        let model = registration::ActiveModel {
            student_name_key: Set(normalize_name(&registration.student_name)),
            student_name: Set(registration.student_name),
            grade: Set(registration.grade),
            division: Set(registration.division),
            email: Set(registration.email),
            committee: Set(registration.committee),
            suggestions: Set(registration.suggestions),
            status: Set(RegistrationStatus::Pending),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_err(e, "registration"))?;
        Ok(inserted.into())
    }

    async fn list_registrations(&self) -> Result<Vec<Registration>, StoreError> {
        let rows = registration::Entity::find()
            .order_by_desc(registration::Column::CreatedAt)
            .order_by_desc(registration::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Registration::from).collect())
    }

    async fn get_registration(&self, id: i32) -> Result<Option<Registration>, StoreError> {
        let row = registration::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Registration::from))
    }

    async fn update_registration_status(
        &self,
        id: i32,
        status: RegistrationStatus,
    ) -> Result<Option<Registration>, StoreError> {
        let Some(existing) = registration::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: registration::ActiveModel = existing.into();
        active.status = Set(status);

        match active.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            // Deleted between the lookup and the update.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_registration(&self, id: i32) -> Result<bool, StoreError> {
        let result = registration::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn registration_stats(&self) -> Result<RegistrationStats, StoreError> {
        let counts: Vec<(RegistrationStatus, i64)> = registration::Entity::find()
            .select_only()
            .column(registration::Column::Status)
            .column_as(registration::Column::Id.count(), "count")
            .group_by(registration::Column::Status)
            .into_tuple()
            .all(&self.db)
            .await?;

        let mut stats = RegistrationStats::default();
        for (status, count) in counts {
            stats.record_many(status, u64::try_from(count).unwrap_or_default());
        }
        Ok(stats)
    }
}

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            password_hash: m.password_hash,
        }
    }
}

#[async_trait]
impl UserStore for DatabaseStore {
    async fn get_user(&self, id: i32) -> Result<Option<User>, StoreError> {
        let row = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(User::from))
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(row.map(User::from))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let model = user::ActiveModel {
            username: Set(new_user.username),
            password_hash: Set(new_user.password_hash),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_err(e, "user"))?;
        Ok(inserted.into())
    }
}
