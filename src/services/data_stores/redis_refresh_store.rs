use chrono::Duration;
use std::sync::Arc;

use crate::{
    domain::{RefreshStoreError, RefreshTokenStore, Subject},
    services::data_stores::redis_service::{RedisService, RedisServiceErr},
    utils::consts::REFRESH_KEY_PREFIX,
};

/// Redis-backed refresh record store: one key per subject, value is the
/// exact refresh token string, expiry handled by redis itself.
pub struct RedisRefreshStore {
    redis_service: Arc<RedisService>,
}

impl RedisRefreshStore {
    pub fn new(redis_service: Arc<RedisService>) -> Self {
        Self { redis_service }
    }

    fn subject_key(subject: &Subject) -> String {
        format!("{REFRESH_KEY_PREFIX}{subject}")
    }
}

impl From<RedisServiceErr> for RefreshStoreError {
    fn from(e: RedisServiceErr) -> Self {
        match e {
            RedisServiceErr::ConnectionErr(msg) => RefreshStoreError::Connection(msg),
            RedisServiceErr::TimeoutErr => RefreshStoreError::Timeout,
            RedisServiceErr::CRUDErr(msg) => RefreshStoreError::Backend(msg),
        }
    }
}

#[async_trait::async_trait]
impl RefreshTokenStore for RedisRefreshStore {
    async fn put(
        &mut self,
        subject: &Subject,
        token: &str,
        ttl: Duration,
    ) -> Result<(), RefreshStoreError> {
        let key = Self::subject_key(subject);
        let ttl_seconds = ttl.num_seconds().max(0) as u64;
        self.redis_service
            .set_key_value(&key, token, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn get(&self, subject: &Subject) -> Result<Option<String>, RefreshStoreError> {
        let key = Self::subject_key(subject);
        Ok(self.redis_service.get(&key).await?)
    }

    async fn delete(&mut self, subject: &Subject) -> Result<(), RefreshStoreError> {
        let key = Self::subject_key(subject);
        // DEL on an absent key reports 0 deletions; that is still success.
        let _ = self.redis_service.delete_key(&key).await?;
        Ok(())
    }
}
