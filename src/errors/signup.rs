use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::AuthError;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters long with at least one uppercase letter and one digit.")]
    InvalidPassword,

    #[error("User with email {0} already exists.")]
    UserAlreadyExists(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,

    #[error("Service temporarily unavailable, please try again later.")]
    ServiceUnavailable,
}

impl From<AuthError> for SignupError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unavailable => SignupError::ServiceUnavailable,
            _ => SignupError::InternalServerError,
        }
    }
}

impl IntoResponse for SignupError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SignupError::Json(_) => StatusCode::BAD_REQUEST,
            SignupError::InvalidEmail => StatusCode::BAD_REQUEST,
            SignupError::InvalidPassword => StatusCode::BAD_REQUEST,
            SignupError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            SignupError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            SignupError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        };

        (status, self.to_string()).into_response()
    }
}
