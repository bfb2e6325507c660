use std::sync::Arc;
use tokio::sync::RwLock;

use storefront_auth::app_state::AppState;
use storefront_auth::services::{HashmapUserStore, RedisRefreshStore, RedisService, SessionService};
use storefront_auth::utils::Config;
use storefront_auth::Application;

#[tokio::main]
async fn main() {
    env_logger::init();
    let config = Arc::new(RwLock::new(
        Config::from_env().expect("Failed to load config"),
    ));

    let redis_service = {
        let config = config.read().await;
        Arc::new(RedisService::new(config.redis_host()))
    };
    let refresh_store = Box::new(RedisRefreshStore::new(redis_service));

    let session_service = Arc::new(RwLock::new(
        SessionService::new(config.clone(), refresh_store).await,
    ));
    let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));

    let app_state = AppState::new(user_store, session_service, config);

    let app = Application::build(app_state, "0.0.0.0:3000")
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
