use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::RegistrationService;
use crate::store::{Stores, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub registrations: RegistrationService,
    pub users: Arc<dyn UserStore>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(stores: Stores, config: AppConfig) -> Self {
        Self {
            registrations: RegistrationService::new(stores.registrations),
            users: stores.users,
            config,
        }
    }
}
