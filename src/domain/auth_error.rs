use thiserror::Error;

use super::data_stores::RefreshStoreError;
use crate::services::token_codec::TokenError;

/// Every way a credential operation can fail.
///
/// All variants except `Unavailable` are terminal for the current request:
/// retrying cannot change a cryptographic or state-mismatch outcome.
/// `Unavailable` signals a transient store failure and is the only kind a
/// caller may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("credential is structurally invalid")]
    Malformed,

    #[error("credential signature check failed")]
    BadSignature,

    #[error("credential has expired")]
    Expired,

    #[error("no credential presented")]
    Missing,

    #[error("credential does not match the active session")]
    Mismatch,

    #[error("no active session for this subject")]
    Revoked,

    #[error("credential store is unavailable, please try again later")]
    Unavailable,
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Malformed => AuthError::Malformed,
            TokenError::BadSignature => AuthError::BadSignature,
            TokenError::Expired => AuthError::Expired,
        }
    }
}

impl From<RefreshStoreError> for AuthError {
    fn from(_: RefreshStoreError) -> Self {
        AuthError::Unavailable
    }
}
