use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::AuthError;

#[derive(Error, Debug)]
pub enum LogoutError {
    #[error("Something went wrong, please try again later.")]
    InternalServerError,

    #[error("Invalid token provided")]
    InvalidToken,

    #[error("Service temporarily unavailable, please try again later.")]
    ServiceUnavailable,
}

impl From<AuthError> for LogoutError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unavailable => LogoutError::ServiceUnavailable,
            _ => LogoutError::InvalidToken,
        }
    }
}

impl IntoResponse for LogoutError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LogoutError::InvalidToken => StatusCode::UNAUTHORIZED,
            LogoutError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            LogoutError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, self.to_string()).into_response()
    }
}
