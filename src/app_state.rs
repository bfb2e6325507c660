use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::UserStore;
use crate::services::SessionService;
use crate::utils::Config;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type SessionServiceType = Arc<RwLock<SessionService>>;
pub type ConfigType = Arc<RwLock<Config>>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub session_service: SessionServiceType,
    pub config: ConfigType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        session_service: SessionServiceType,
        config: ConfigType,
    ) -> Self {
        Self {
            user_store,
            session_service,
            config,
        }
    }
}
