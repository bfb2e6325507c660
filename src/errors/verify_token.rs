use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::AuthError;

#[derive(Error, Debug)]
pub enum VerifyTokenError {
    #[error("Token not provided")]
    MissingToken,

    #[error("Invalid token provided")]
    InvalidToken,
}

impl From<AuthError> for VerifyTokenError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Missing => VerifyTokenError::MissingToken,
            _ => VerifyTokenError::InvalidToken,
        }
    }
}

impl IntoResponse for VerifyTokenError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            VerifyTokenError::MissingToken => StatusCode::UNPROCESSABLE_ENTITY,
            VerifyTokenError::InvalidToken => StatusCode::UNAUTHORIZED,
        };

        (status, self.to_string()).into_response()
    }
}
