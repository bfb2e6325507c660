pub mod hashmap_refresh_store;
pub mod hashmap_user_store;
pub mod redis_refresh_store;
pub mod redis_service;

pub use hashmap_refresh_store::*;
pub use hashmap_user_store::*;
pub use redis_refresh_store::*;
pub use redis_service::*;
