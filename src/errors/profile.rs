use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::AuthError;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Not logged in")]
    MissingToken,

    #[error("Invalid token provided")]
    InvalidToken,
}

impl From<AuthError> for ProfileError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Missing => ProfileError::MissingToken,
            _ => ProfileError::InvalidToken,
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
    }
}
