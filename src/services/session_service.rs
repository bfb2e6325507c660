/// Session lifecycle orchestration.
///
/// This module provides the `SessionService`, which coordinates:
/// - Issuance of an access + refresh credential pair
/// - Rotation (exchanging a valid refresh token for a fresh access token)
/// - Revocation (dropping the server-side refresh record)
/// - Validation of access tokens
///
/// Security model:
/// 1. Access tokens are short-lived and stateless; nothing server-side is
///    consulted to validate them.
/// 2. Refresh tokens are long-lived and bound to a store record keyed by
///    subject. A refresh token authorizes a rotation only if its signature
///    verifies, it is unexpired, AND it matches the stored record exactly.
///    Signature verification alone is never sufficient.
/// 3. One refresh session per subject: issuing again overwrites the record,
///    silently invalidating any earlier refresh token still in flight.
///
/// Concurrency:
/// - The store sits behind an async `RwLock<Box<dyn RefreshTokenStore>>`;
///   reads and writes each take the lock only for one store call. Rotation
///   performs no locking across its read-then-compare, so a concurrent
///   revoke or issue can surface as a benign fail-closed `Mismatch` or
///   `Revoked`.
use std::sync::Arc;
use tokio::sync::RwLock;

use chrono::Duration;

use crate::domain::{AuthError, RefreshTokenStore, SessionPair, Subject};
use crate::services::token_codec::{TokenCodec, TokenPurpose};
use crate::utils::config::Config;

#[derive(Clone)]
pub struct SessionService {
    cfg: Arc<RwLock<Config>>,
    codec: Arc<TokenCodec>,
    store: Arc<RwLock<Box<dyn RefreshTokenStore + Send + Sync>>>,
}

// Both strings are folded through fixed-width digests first; equality on
// blake3::Hash is constant-time, so the comparison leaks nothing about the
// stored value.
fn tokens_match(stored: &str, presented: &str) -> bool {
    blake3::hash(stored.as_bytes()) == blake3::hash(presented.as_bytes())
}

impl SessionService {
    /// Construct a new `SessionService`.
    ///
    /// Signing secrets are read from `cfg` once, here; they are
    /// process-lifetime configuration, not runtime-mutable state.
    pub async fn new(
        cfg: Arc<RwLock<Config>>,
        store: Box<dyn RefreshTokenStore + Send + Sync>,
    ) -> Self {
        let codec = {
            let config = cfg.read().await;
            Arc::new(TokenCodec::from_config(&config))
        };
        Self {
            cfg,
            codec,
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Issue an access + refresh pair for `subject` and persist the refresh
    /// record.
    ///
    /// Overwrites any prior record for the same subject: the most recent
    /// issuance wins and earlier refresh tokens stop matching.
    pub async fn issue_session(&self, subject: &Subject) -> Result<SessionPair, AuthError> {
        let (access_ttl, refresh_ttl) = {
            let config = self.cfg.read().await;
            (
                Duration::seconds(config.token_ttl_seconds()),
                Duration::seconds(config.refresh_token_ttl_seconds()),
            )
        };

        let access = self
            .codec
            .mint(subject, TokenPurpose::Access, access_ttl)
            .map_err(|e| {
                log::error!("access token signing failed for subject {subject}: {e}");
                AuthError::Unavailable
            })?;
        let refresh = self
            .codec
            .mint(subject, TokenPurpose::Refresh, refresh_ttl)
            .map_err(|e| {
                log::error!("refresh token signing failed for subject {subject}: {e}");
                AuthError::Unavailable
            })?;

        {
            let mut st = self.store.write().await;
            st.put(subject, &refresh, refresh_ttl).await?;
        }

        Ok(SessionPair {
            subject: subject.clone(),
            access_token: access,
            refresh_token: refresh,
        })
    }

    /// Exchange a presented refresh token for a new access token.
    ///
    /// Checks run in a fixed order, each failing closed:
    /// 1. absent or empty input -> `Missing`
    /// 2. signature/expiry      -> `Expired` / `BadSignature` / `Malformed`
    /// 3. store lookup          -> `Revoked` when no record exists
    /// 4. byte-exact match      -> `Mismatch` when superseded or foreign
    ///
    /// The refresh token itself is not rotated: the same token stays valid
    /// until its own expiry or an explicit revoke.
    pub async fn rotate(&self, presented: Option<&str>) -> Result<String, AuthError> {
        let presented = match presented {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthError::Missing),
        };

        let subject = self.codec.verify(presented, TokenPurpose::Refresh)?;

        let stored = {
            let st = self.store.read().await;
            st.get(&subject).await?
        };
        let stored = match stored {
            Some(token) => token,
            None => {
                log::warn!("rotation rejected for subject {subject}: no active session");
                return Err(AuthError::Revoked);
            }
        };

        if !tokens_match(&stored, presented) {
            log::warn!("rotation rejected for subject {subject}: token mismatch");
            return Err(AuthError::Mismatch);
        }

        let access_ttl = {
            let config = self.cfg.read().await;
            Duration::seconds(config.token_ttl_seconds())
        };
        self.codec
            .mint(&subject, TokenPurpose::Access, access_ttl)
            .map_err(|e| {
                log::error!("access token signing failed for subject {subject}: {e}");
                AuthError::Unavailable
            })
    }

    /// Drop the refresh record for `subject`.
    ///
    /// Safe to call repeatedly; deleting an absent record is a no-op.
    /// Already-issued access tokens stay valid until their own expiry.
    pub async fn revoke(&self, subject: &Subject) -> Result<(), AuthError> {
        let mut st = self.store.write().await;
        st.delete(subject).await?;
        Ok(())
    }

    /// Verify a presented refresh token and revoke its subject's session.
    ///
    /// The logout path: the client identifies its session with the refresh
    /// credential it holds.
    pub async fn revoke_presented(&self, presented: &str) -> Result<Subject, AuthError> {
        let subject = self.codec.verify(presented, TokenPurpose::Refresh)?;
        self.revoke(&subject).await?;
        Ok(subject)
    }

    /// Validate an access token and return its subject.
    ///
    /// Pure codec check, no store round-trip: access tokens are stateless
    /// by design and are never individually revoked.
    pub fn verify_access(&self, token: &str) -> Result<Subject, AuthError> {
        if token.is_empty() {
            return Err(AuthError::Missing);
        }
        Ok(self.codec.verify(token, TokenPurpose::Access)?)
    }
}
