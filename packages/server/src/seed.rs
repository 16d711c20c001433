use tracing::{info, warn};

use crate::config::AdminConfig;
use crate::store::{NewUser, StoreError, UserStore};
use crate::utils::hash;

/// Create the dashboard account from configuration if it does not exist yet.
///
/// An existing account keeps its stored password.
pub async fn seed_admin(users: &dyn UserStore, admin: &AdminConfig) -> Result<(), StoreError> {
    let Some(password) = admin.password.as_deref().filter(|p| !p.is_empty()) else {
        warn!("admin.password is not set; no admin account seeded");
        return Ok(());
    };

    if users.find_user_by_username(&admin.username).await?.is_some() {
        return Ok(());
    }

    let password_hash = hash::hash_password(password)
        .map_err(|e| StoreError::Backend(format!("Password hash error: {}", e)))?;

    match users
        .create_user(NewUser {
            username: admin.username.clone(),
            password_hash,
        })
        .await
    {
        Ok(user) => {
            info!(id = user.id, username = %user.username, "Seeded admin account");
            Ok(())
        }
        // Another instance seeded it first.
        Err(StoreError::Conflict(_)) => Ok(()),
        Err(e) => Err(e),
    }
}
