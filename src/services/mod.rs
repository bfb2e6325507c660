pub mod auth;
pub mod data_stores;
pub mod session_service;
pub mod token_codec;

pub use auth::*;
pub use data_stores::*;
pub use session_service::*;
pub use token_codec::*;
