pub mod refresh_store_err;
pub mod refresh_token_store;
pub mod user_store;
pub mod user_store_err;

pub use refresh_store_err::*;
pub use refresh_token_store::*;
pub use user_store::UserStore;
pub use user_store_err::UserStoreError;
