use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::domain::{RefreshStoreError, RefreshTokenStore, Subject};

struct StoredToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// In-memory refresh record store. Mirrors the redis store's TTL behavior:
/// an entry past its expiry reads as absent.
#[derive(Default)]
pub struct HashmapRefreshStore {
    records: HashMap<Subject, StoredToken>,
}

impl HashmapRefreshStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RefreshTokenStore for HashmapRefreshStore {
    async fn put(
        &mut self,
        subject: &Subject,
        token: &str,
        ttl: Duration,
    ) -> Result<(), RefreshStoreError> {
        self.records.insert(
            subject.clone(),
            StoredToken {
                token: token.to_owned(),
                expires_at: Utc::now() + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, subject: &Subject) -> Result<Option<String>, RefreshStoreError> {
        match self.records.get(subject) {
            Some(stored) if stored.expires_at > Utc::now() => Ok(Some(stored.token.clone())),
            _ => Ok(None),
        }
    }

    async fn delete(&mut self, subject: &Subject) -> Result<(), RefreshStoreError> {
        self.records.remove(subject);
        Ok(())
    }
}
