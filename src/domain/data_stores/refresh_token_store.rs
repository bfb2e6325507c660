use chrono::Duration;

use super::refresh_store_err::RefreshStoreError;
use crate::domain::subject::Subject;

/// Server-side record of the one active refresh credential per subject.
///
/// The store is the single source of truth for refresh-token validity: a
/// presented token authorizes a rotation only if it matches the stored
/// value exactly. Implementations must expire records on their own once
/// the ttl passes; nothing in this crate sweeps them.
#[async_trait::async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Upsert the record for `subject`, overwriting any previous token.
    async fn put(
        &mut self,
        subject: &Subject,
        token: &str,
        ttl: Duration,
    ) -> Result<(), RefreshStoreError>;

    /// Current token for `subject`, or None if absent/expired.
    async fn get(&self, subject: &Subject) -> Result<Option<String>, RefreshStoreError>;

    /// Remove the record. Deleting an absent record is not an error.
    async fn delete(&mut self, subject: &Subject) -> Result<(), RefreshStoreError>;
}
