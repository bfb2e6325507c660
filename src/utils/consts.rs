use std::time::Duration;

// 15 minutes / 7 days, matching the cookie max-ages set by the transport.
pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 15 * 60;
pub const DEFAULT_REFRESH_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

pub const DEFAULT_ACCESS_COOKIE_NAME: &str = "accessToken";
pub const DEFAULT_REFRESH_COOKIE_NAME: &str = "refreshToken";

// Store key prefix: one record per subject.
pub const REFRESH_KEY_PREFIX: &str = "refresh_token:";

// Upper bound on any single credential-store call.
pub const STORE_OP_TIMEOUT: Duration = Duration::from_secs(2);

pub mod env {
    pub const ACCESS_TOKEN_SECRET_ENV_VAR: &str = "ACCESS_TOKEN_SECRET";
    pub const REFRESH_TOKEN_SECRET_ENV_VAR: &str = "REFRESH_TOKEN_SECRET";
    pub const ACCESS_TTL_SECONDS_ENV_VAR: &str = "ACCESS_TTL_SECONDS";
    pub const REFRESH_TTL_SECONDS_ENV_VAR: &str = "REFRESH_TTL_SECONDS";
    pub const REDIS_HOST_ENV_VAR: &str = "REDIS_HOST";
    pub const ACCESS_COOKIE_NAME_ENV_VAR: &str = "ACCESS_COOKIE_NAME";
    pub const REFRESH_COOKIE_NAME_ENV_VAR: &str = "REFRESH_COOKIE_NAME";
}
