use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub iat: i64,    // Issued at time
    pub exp: i64,    // Expiration time
    pub jti: String, // Token ID, uniquifies same-second mints
}
