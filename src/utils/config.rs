use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts;

// Minimum secret length for HS256 signing keys.
const MIN_SECRET_BYTES: usize = 32;

#[derive(Clone)]
pub struct Config {
    access_token_secret: String,
    refresh_token_secret: String,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    redis_host: String,
    access_cookie_name: String,
    refresh_cookie_name: String,
}

impl Config {
    pub fn access_token_secret(&self) -> &str {
        &self.access_token_secret
    }
    pub fn refresh_token_secret(&self) -> &str {
        &self.refresh_token_secret
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_token_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn redis_host(&self) -> &str {
        &self.redis_host
    }
    pub fn access_cookie_name(&self) -> &str {
        &self.access_cookie_name
    }
    pub fn refresh_cookie_name(&self) -> &str {
        &self.refresh_cookie_name
    }

    /// Build a config directly. Tests use this to inject distinct secrets
    /// per case; the two secrets must be independent so access and refresh
    /// tokens cannot forge each other.
    pub fn new(
        access_token_secret: String,
        refresh_token_secret: String,
        access_ttl_seconds: i64,
        refresh_ttl_seconds: i64,
        redis_host: String,
    ) -> Result<Self, ConfigError> {
        if access_token_secret.len() < MIN_SECRET_BYTES
            || refresh_token_secret.len() < MIN_SECRET_BYTES
        {
            return Err(ConfigError::WrongLen(
                "signing secrets must be at least 32 bytes",
            ));
        }
        if access_token_secret == refresh_token_secret {
            return Err(ConfigError::Invalid(
                "access and refresh secrets must differ",
            ));
        }

        Ok(Self {
            access_token_secret,
            refresh_token_secret,
            access_ttl_seconds,
            refresh_ttl_seconds,
            redis_host,
            access_cookie_name: consts::DEFAULT_ACCESS_COOKIE_NAME.to_owned(),
            refresh_cookie_name: consts::DEFAULT_REFRESH_COOKIE_NAME.to_owned(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let access_token_secret = req_var(consts::env::ACCESS_TOKEN_SECRET_ENV_VAR)?;
        let refresh_token_secret = req_var(consts::env::REFRESH_TOKEN_SECRET_ENV_VAR)?;

        let access_ttl_seconds = parse_i64_or(
            consts::env::ACCESS_TTL_SECONDS_ENV_VAR,
            consts::DEFAULT_ACCESS_TTL_SECONDS,
        )?;
        let refresh_ttl_seconds = parse_i64_or(
            consts::env::REFRESH_TTL_SECONDS_ENV_VAR,
            consts::DEFAULT_REFRESH_TTL_SECONDS,
        )?;

        let redis_host = req_var(consts::env::REDIS_HOST_ENV_VAR)?;

        let mut config = Self::new(
            access_token_secret,
            refresh_token_secret,
            access_ttl_seconds,
            refresh_ttl_seconds,
            redis_host,
        )?;

        if let Some(name) = opt_var(consts::env::ACCESS_COOKIE_NAME_ENV_VAR) {
            config.access_cookie_name = name;
        }
        if let Some(name) = opt_var(consts::env::REFRESH_COOKIE_NAME_ENV_VAR) {
            config.refresh_cookie_name = name;
        }

        Ok(config)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("{0}")]
    WrongLen(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_i64_or(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match opt_var(key) {
        Some(v) => v.parse::<i64>().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
