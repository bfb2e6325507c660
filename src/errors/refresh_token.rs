use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::AuthError;

#[derive(Error, Debug)]
pub enum RefreshTokenError {
    #[error("No refresh token provided")]
    MissingToken,

    #[error("Invalid refresh token")]
    InvalidToken,

    #[error("Session has been revoked, please log in again")]
    SessionRevoked,

    #[error("Service temporarily unavailable, please try again later.")]
    ServiceUnavailable,
}

impl From<AuthError> for RefreshTokenError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Missing => RefreshTokenError::MissingToken,
            AuthError::Malformed | AuthError::BadSignature | AuthError::Expired => {
                RefreshTokenError::InvalidToken
            }
            AuthError::Mismatch | AuthError::Revoked => RefreshTokenError::SessionRevoked,
            AuthError::Unavailable => RefreshTokenError::ServiceUnavailable,
        }
    }
}

impl IntoResponse for RefreshTokenError {
    fn into_response(self) -> axum::response::Response {
        // Every credential rejection requires re-authentication; only a
        // store outage is a temporary failure.
        let status = match self {
            RefreshTokenError::MissingToken => StatusCode::UNAUTHORIZED,
            RefreshTokenError::InvalidToken => StatusCode::UNAUTHORIZED,
            RefreshTokenError::SessionRevoked => StatusCode::UNAUTHORIZED,
            RefreshTokenError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, self.to_string()).into_response()
    }
}
